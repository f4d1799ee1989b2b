use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::{BedroomBucket, Bucket, PriceBucket};

#[derive(Serialize)]
struct PreferenceOption {
    value: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct PreferenceOptions {
    bedrooms: Vec<PreferenceOption>,
    prices: Vec<PreferenceOption>,
}

fn options_for<B: Bucket>() -> Vec<PreferenceOption> {
    crate::domain::options::<B>()
        .into_iter()
        .map(|(value, label)| PreferenceOption { value, label })
        .collect()
}

/// Both filter vocabularies in display order.
pub async fn preference_options() -> HttpResponse {
    HttpResponse::Ok().json(PreferenceOptions {
        bedrooms: options_for::<BedroomBucket>(),
        prices: options_for::<PriceBucket>(),
    })
}
