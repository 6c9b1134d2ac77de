//! Customer handlers
//!
//! Staff-only customer records.

use axum::extract::State;
use fausse_service::dto::{
    CreateCustomerRequest, CustomerEnvelope, CustomerListResponse, UpdateCustomerRequest,
};
use fausse_service::CustomerService;

use crate::extractors::{AdminEmployee, AuthEmployee, IdPath, JsonBody};
use crate::response::{ApiResult, Created, Empty, Success};
use crate::state::AppState;

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    _auth: AuthEmployee,
) -> ApiResult<Success<CustomerListResponse>> {
    let service = CustomerService::new(state.service_context());
    let customers = service.list().await?;
    Ok(Success::new("Customers retrieved", customers))
}

/// GET /api/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<CustomerEnvelope>> {
    let service = CustomerService::new(state.service_context());
    let customer = service.get(id).await?;
    Ok(Success::new("Customer retrieved", CustomerEnvelope { customer }))
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    JsonBody(request): JsonBody<CreateCustomerRequest>,
) -> ApiResult<Created<Success<CustomerEnvelope>>> {
    let service = CustomerService::new(state.service_context());
    let customer = service.create(request).await?;
    Ok(Created(Success::new(
        "Customer created successfully",
        CustomerEnvelope { customer },
    )))
}

/// PUT /api/customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateCustomerRequest>,
) -> ApiResult<Success<CustomerEnvelope>> {
    let service = CustomerService::new(state.service_context());
    let customer = service.update(id, request).await?;
    Ok(Success::new(
        "Customer updated successfully",
        CustomerEnvelope { customer },
    ))
}

/// Delete a customer with no reservations
///
/// DELETE /api/customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    _admin: AdminEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<Empty>> {
    let service = CustomerService::new(state.service_context());
    service.delete(id).await?;
    Ok(Success::message("Customer deleted successfully"))
}
