use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web,
};

use super::helpers::{error_chain_fmt, json_error};
use crate::{
    domain::{SubscriptionForm, SubscriptionRequest, ValidationErrors, validate},
    subscription_client::{SubmissionError, SubscriptionClient},
};

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Invalid subscription: {0}")]
    ValidationError(ValidationErrors),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubscribeError::Rejected(_) => StatusCode::BAD_GATEWAY,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SubscribeError::ValidationError(errors) => HttpResponse::BadRequest()
                .json(serde_json::json!({ "errors": errors })),
            SubscribeError::Rejected(message) => json_error(self.status_code(), message),
            SubscribeError::UnexpectedError(_) => {
                json_error(self.status_code(), "An unexpected error occurred")
            }
        }
    }
}

/// Extractor error handler for `POST /subscriptions`. A body that is not a
/// JSON object is answered like an empty form: every field gets its message.
pub fn unreadable_subscription(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error = %error, "Unreadable subscription body");
    let errors = validate(&SubscriptionForm::default())
        .err()
        .unwrap_or_default();
    SubscribeError::ValidationError(errors).into()
}

#[tracing::instrument(
    name = "Adding a new subscription",
    skip(form, client),
    fields(contact_type = %form.contact_type)
)]
pub async fn subscribe(
    form: web::Json<SubscriptionForm>,
    client: web::Data<SubscriptionClient>,
) -> Result<HttpResponse, SubscribeError> {
    let request: SubscriptionRequest = form
        .into_inner()
        .try_into()
        .map_err(SubscribeError::ValidationError)?;

    client
        .create_subscription(&request)
        .await
        .map_err(|e| match e {
            SubmissionError::Rejected(message) => SubscribeError::Rejected(message),
            e @ SubmissionError::Transport(_) => SubscribeError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to submit the subscription."),
            ),
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "subscribed" })))
}
