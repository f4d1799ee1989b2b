use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::{BedroomBucket, PreferenceSet, PriceBucket, SubscriptionRequest};

const FALLBACK_REJECTION: &str = "Failed to create subscription";

/// Hands validated subscriptions to the external subscription service.
#[derive(Clone, Debug)]
pub struct SubscriptionClient {
    http_client: Client,
    endpoint: Url,
    auth_token: SecretString,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSubscriptionBody<'a> {
    #[serde(rename = "type")]
    contact_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<&'a str>,
    bedroom_preferences: &'a PreferenceSet<BedroomBucket>,
    price_preferences: &'a PreferenceSet<PriceBucket>,
}

impl<'a> From<&'a SubscriptionRequest> for CreateSubscriptionBody<'a> {
    fn from(request: &'a SubscriptionRequest) -> Self {
        Self {
            contact_type: request.contact_method.kind(),
            email: request.contact_method.email().map(AsRef::as_ref),
            webhook_url: request.contact_method.webhook_url().map(AsRef::as_ref),
            bedroom_preferences: &request.bedroom_preferences,
            price_preferences: &request.price_preferences,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("The subscription service rejected the request: {0}")]
    Rejected(String),
    #[error("Failed to reach the subscription service.")]
    Transport(#[from] reqwest::Error),
}

impl SubscriptionClient {
    pub fn new(
        base_url: &str,
        create_path: &str,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(create_path))
            .with_context(|| format!("Invalid subscription service url: {base_url}"))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the subscription service http client.")?;

        Ok(Self {
            http_client,
            endpoint,
            auth_token,
        })
    }

    #[tracing::instrument(
        name = "Submitting subscription to the subscription service",
        skip_all,
        fields(contact_type = request.contact_method.kind())
    )]
    pub async fn create_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<(), SubmissionError> {
        let body = CreateSubscriptionBody::from(request);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(self.auth_token.expose_secret())
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| FALLBACK_REJECTION.to_string());
        tracing::warn!(%status, %message, "Subscription service rejected the request");

        Err(SubmissionError::Rejected(message))
    }
}
