//! Newsletter handlers

use axum::{extract::State, response::IntoResponse, response::Response};
use fausse_service::dto::{
    NewsletterRequest, SubscriberEnvelope, SubscriberListResponse, UpdateSubscriberRequest,
};
use fausse_service::{NewsletterService, SubscriptionOutcome};

use crate::extractors::{AdminEmployee, IdPath, JsonBody};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Subscribe an email, or reactivate a lapsed subscription
///
/// POST /api/newsletter/subscribe
///
/// A new subscription is a 201; a reactivation is a 200.
pub async fn subscribe(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewsletterRequest>,
) -> ApiResult<Response> {
    let service = NewsletterService::new(state.service_context());

    let response = match service.subscribe_request(request).await? {
        SubscriptionOutcome::Subscribed(subscriber) => Created(Success::new(
            "Thank you for subscribing to our newsletter!",
            SubscriberEnvelope { subscriber },
        ))
        .into_response(),
        SubscriptionOutcome::Reactivated(subscriber) => Success::new(
            "Your subscription has been reactivated!",
            SubscriberEnvelope { subscriber },
        )
        .into_response(),
    };

    Ok(response)
}

/// POST /api/newsletter/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewsletterRequest>,
) -> ApiResult<Success<SubscriberEnvelope>> {
    let service = NewsletterService::new(state.service_context());
    let subscriber = service.unsubscribe(request).await?;
    Ok(Success::new(
        "You have been successfully unsubscribed",
        SubscriberEnvelope { subscriber },
    ))
}

/// GET /api/newsletter/subscribers
pub async fn list_subscribers(
    State(state): State<AppState>,
    _admin: AdminEmployee,
) -> ApiResult<Success<SubscriberListResponse>> {
    let service = NewsletterService::new(state.service_context());
    let subscribers = service.list_subscribers().await?;
    Ok(Success::new("Subscribers retrieved", subscribers))
}

/// PUT /api/newsletter/subscribers/:id
pub async fn update_subscriber(
    State(state): State<AppState>,
    _admin: AdminEmployee,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateSubscriberRequest>,
) -> ApiResult<Success<SubscriberEnvelope>> {
    let service = NewsletterService::new(state.service_context());
    let subscriber = service.update_subscriber(id, request).await?;
    Ok(Success::new(
        "Subscriber updated successfully",
        SubscriberEnvelope { subscriber },
    ))
}
