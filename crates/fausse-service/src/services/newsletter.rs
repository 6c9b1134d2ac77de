//! Newsletter service
//!
//! Subscribe / unsubscribe / reactivate, keyed by normalized email. The
//! repository mirrors every state change onto a customer with the same email.

use fausse_core::error::DomainError;
use fausse_core::value_objects::{normalize_email, validate_email_address};
use tracing::{info, instrument};

use crate::dto::{
    NewsletterRequest, SubscriberListResponse, SubscriberResponse, UpdateSubscriberRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What a successful subscribe call did
#[derive(Debug, Clone)]
pub enum SubscriptionOutcome {
    /// A new subscriber row was created
    Subscribed(SubscriberResponse),
    /// An inactive subscriber was switched back on
    Reactivated(SubscriberResponse),
}

impl SubscriptionOutcome {
    pub fn subscriber(&self) -> &SubscriberResponse {
        match self {
            Self::Subscribed(s) | Self::Reactivated(s) => s,
        }
    }

    pub fn is_reactivation(&self) -> bool {
        matches!(self, Self::Reactivated(_))
    }
}

/// Newsletter service
pub struct NewsletterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NewsletterService<'a> {
    /// Create a new NewsletterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe an email
    ///
    /// An active subscription is a conflict; an inactive one is reactivated
    /// in place.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str) -> ServiceResult<SubscriptionOutcome> {
        let email = checked_email(email)?;

        match self.ctx.newsletter_repo().find_by_email(&email).await? {
            Some(existing) if existing.is_active => Err(DomainError::AlreadySubscribed.into()),
            Some(existing) => {
                let subscriber = self
                    .ctx
                    .newsletter_repo()
                    .set_active(existing.id, true)
                    .await?;
                info!(subscriber_id = subscriber.id, "Newsletter subscription reactivated");
                Ok(SubscriptionOutcome::Reactivated(subscriber.into()))
            }
            None => {
                let subscriber = self.ctx.newsletter_repo().create(&email).await?;
                info!(subscriber_id = subscriber.id, "Newsletter subscription created");
                Ok(SubscriptionOutcome::Subscribed(subscriber.into()))
            }
        }
    }

    /// Subscribe from a request body
    pub async fn subscribe_request(
        &self,
        request: NewsletterRequest,
    ) -> ServiceResult<SubscriptionOutcome> {
        let email = request_email(request)?;
        self.subscribe(&email).await
    }

    /// Unsubscribe an email; only an active subscription can be ended
    #[instrument(skip(self, request))]
    pub async fn unsubscribe(&self, request: NewsletterRequest) -> ServiceResult<SubscriberResponse> {
        let email = checked_email(&request_email(request)?)?;

        let existing = self
            .ctx
            .newsletter_repo()
            .find_by_email(&email)
            .await?
            .filter(|s| s.is_active)
            .ok_or(DomainError::NotSubscribed)?;

        let subscriber = self
            .ctx
            .newsletter_repo()
            .set_active(existing.id, false)
            .await?;

        info!(subscriber_id = subscriber.id, "Newsletter subscription ended");
        Ok(subscriber.into())
    }

    /// List every subscriber, active or not
    #[instrument(skip(self))]
    pub async fn list_subscribers(&self) -> ServiceResult<SubscriberListResponse> {
        let subscribers: Vec<SubscriberResponse> = self
            .ctx
            .newsletter_repo()
            .list()
            .await?
            .into_iter()
            .map(SubscriberResponse::from)
            .collect();

        Ok(SubscriberListResponse {
            count: subscribers.len(),
            subscribers,
        })
    }

    /// Admin update of a subscriber's active flag
    #[instrument(skip(self, request))]
    pub async fn update_subscriber(
        &self,
        id: i64,
        request: UpdateSubscriberRequest,
    ) -> ServiceResult<SubscriberResponse> {
        let subscriber = self
            .ctx
            .newsletter_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subscriber", id))?;

        let Some(is_active) = request.is_active else {
            return Ok(subscriber.into());
        };

        let updated = self.ctx.newsletter_repo().set_active(id, is_active).await?;
        info!(subscriber_id = id, is_active, "Subscriber updated");
        Ok(updated.into())
    }
}

fn request_email(request: NewsletterRequest) -> ServiceResult<String> {
    request
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ServiceError::validation("Email is required"))
}

fn checked_email(raw: &str) -> ServiceResult<String> {
    let email = normalize_email(raw);
    validate_email_address(&email)?;
    Ok(email)
}
