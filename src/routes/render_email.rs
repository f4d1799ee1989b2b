use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType, web};
use anyhow::Context;
use serde_json::Value;

use super::helpers::{error_chain_fmt, json_error};
use crate::email::{AlertEmailRenderer, AlertLinks, EmailContentModel, truncate_description};

const REQUIRED_FIELDS: [&str; 6] = [
    "price",
    "bedrooms",
    "address",
    "listingUrl",
    "subscriptionBedrooms",
    "subscriptionPriceRange",
];

#[derive(thiserror::Error)]
pub enum RenderEmailError {
    #[error("Missing or invalid required email props: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for RenderEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RenderEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            RenderEmailError::MissingFields(_) => StatusCode::BAD_REQUEST,
            RenderEmailError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RenderEmailError::MissingFields(missing) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Missing or invalid required email props",
                    "required": REQUIRED_FIELDS,
                    "missing": missing,
                }))
            }
            RenderEmailError::UnexpectedError(_) => {
                json_error(self.status_code(), "Failed to render email template")
            }
        }
    }
}

/// Request body of the render endpoint. Required props must be JSON strings;
/// optional props that are absent, empty or not strings are ignored.
#[derive(Debug)]
struct RenderEmailRequest {
    price: String,
    bedrooms: String,
    address: String,
    listing_url: String,
    subscription_bedrooms: String,
    subscription_price_range: String,
    description: Option<String>,
    cover_image_url: Option<String>,
    posted_at_text: Option<String>,
    unsubscribe_url: Option<String>,
    listings_overview_url: Option<String>,
}

impl TryFrom<&Value> for RenderEmailRequest {
    type Error = Vec<&'static str>;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !body.get(field).is_some_and(Value::is_string))
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let required = |field: &str| string_prop(body, field).unwrap_or_default();
        let optional = |field: &str| string_prop(body, field).filter(|s| !s.is_empty());

        Ok(Self {
            price: required("price"),
            bedrooms: required("bedrooms"),
            address: required("address"),
            listing_url: required("listingUrl"),
            subscription_bedrooms: required("subscriptionBedrooms"),
            subscription_price_range: required("subscriptionPriceRange"),
            description: optional("description"),
            cover_image_url: optional("coverImageUrl"),
            posted_at_text: optional("postedAtText"),
            unsubscribe_url: optional("unsubscribeUrl"),
            listings_overview_url: optional("listingsOverviewUrl"),
        })
    }
}

fn string_prop(body: &Value, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(str::to_string)
}

impl RenderEmailRequest {
    fn into_content(self, links: &AlertLinks) -> EmailContentModel {
        EmailContentModel {
            price_text: self.price,
            bedrooms_text: self.bedrooms,
            address: self.address,
            truncated_description: truncate_description(
                self.description.as_deref().unwrap_or_default(),
            ),
            cover_image_url: self.cover_image_url,
            listing_url: self.listing_url,
            subscription_bedrooms_text: self.subscription_bedrooms,
            subscription_price_text: self.subscription_price_range,
            posted_at_text: self.posted_at_text,
            unsubscribe_url: self.unsubscribe_url.unwrap_or_else(|| "#".into()),
            listings_overview_url: self
                .listings_overview_url
                .unwrap_or_else(|| links.listings_overview_url.clone()),
        }
    }
}

#[tracing::instrument(name = "Render alert email request", skip_all)]
pub async fn render_email(
    body: web::Bytes,
    renderer: web::Data<AlertEmailRenderer>,
    links: web::Data<AlertLinks>,
) -> Result<HttpResponse, RenderEmailError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let request =
        RenderEmailRequest::try_from(&payload).map_err(RenderEmailError::MissingFields)?;

    let html = renderer
        .render(&request.into_content(&links))
        .inspect_err(|e| tracing::error!(error.cause_chain = ?e, "Alert email rendering failed"))
        .context("Failed to render the alert email.")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

pub async fn method_not_allowed() -> HttpResponse {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
