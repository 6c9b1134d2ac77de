//! Customer service

use fausse_core::entities::NewCustomer;
use fausse_core::error::DomainError;
use fausse_core::value_objects::validate_email_address;
use tracing::{info, instrument};

use crate::dto::requests::trim_optional;
use crate::dto::{CreateCustomerRequest, CustomerListResponse, CustomerResponse, UpdateCustomerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Customer service
pub struct CustomerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CustomerService<'a> {
    /// Create a new CustomerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<CustomerListResponse> {
        let customers: Vec<CustomerResponse> = self
            .ctx
            .customer_repo()
            .list()
            .await?
            .into_iter()
            .map(CustomerResponse::from)
            .collect();

        Ok(CustomerListResponse {
            count: customers.len(),
            customers,
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CustomerResponse> {
        self.ctx
            .customer_repo()
            .find_by_id(id)
            .await?
            .map(CustomerResponse::from)
            .ok_or_else(|| DomainError::CustomerNotFound(id).into())
    }

    /// Create a customer; emails are unique ignoring case
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCustomerRequest) -> ServiceResult<CustomerResponse> {
        let (Some(name), Some(email)) = (trim_optional(request.name), trim_optional(request.email))
        else {
            return Err(ServiceError::validation("Name and email are required fields"));
        };

        validate_email_address(&email)?;

        if self.ctx.customer_repo().find_by_email(&email).await?.is_some() {
            return Err(DomainError::CustomerEmailExists.into());
        }

        let customer = self
            .ctx
            .customer_repo()
            .create(&NewCustomer {
                name,
                email,
                phone: trim_optional(request.phone),
                newsletter_signup: request.newsletter_signup,
            })
            .await?;

        info!(customer_id = customer.id, "Customer created");
        Ok(customer.into())
    }

    /// Partial update; only the fields present in the request change
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateCustomerRequest,
    ) -> ServiceResult<CustomerResponse> {
        let mut customer = self
            .ctx
            .customer_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CustomerNotFound(id))?;

        let name = trim_optional(request.name).unwrap_or_else(|| customer.name.clone());

        let email = match trim_optional(request.email) {
            Some(email) => {
                validate_email_address(&email)?;
                if let Some(other) = self.ctx.customer_repo().find_by_email(&email).await? {
                    if other.id != id {
                        return Err(DomainError::CustomerEmailExists.into());
                    }
                }
                email
            }
            None => customer.email.clone(),
        };

        let phone = match request.phone {
            Some(phone) => trim_optional(Some(phone)),
            None => customer.phone.clone(),
        };

        customer.set_contact(name, email, phone);
        if let Some(subscribed) = request.newsletter_signup {
            customer.set_newsletter_signup(subscribed);
        }

        let customer = self.ctx.customer_repo().update(&customer).await?;
        info!(customer_id = id, "Customer updated");
        Ok(customer.into())
    }

    /// Delete a customer that has no reservations
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.ctx.customer_repo().find_by_id(id).await?.is_none() {
            return Err(DomainError::CustomerNotFound(id).into());
        }

        let count = self.ctx.customer_repo().reservation_count(id).await?;
        if count > 0 {
            return Err(DomainError::CustomerHasReservations { count }.into());
        }

        self.ctx.customer_repo().delete(id).await?;
        info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}
