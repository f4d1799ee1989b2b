use crate::domain::{Bucket, ListingFacts, PreferenceSet, SubscriptionPreferences};

pub const DEFAULT_UNSUBSCRIBE_BASE_URL: &str = "https://thecannonalerts.ca/unsubscribe";
pub const DEFAULT_LISTINGS_OVERVIEW_URL: &str =
    "https://thecannon.ca/housing/?wanted_forsale=forsale&sortby=date";

pub const DESCRIPTION_LIMIT: usize = 200;
const ELLIPSIS: &str = "...";

const ADDRESS_PLACEHOLDER: &str = "Address not available";
const DESCRIPTION_PLACEHOLDER: &str = "No description available";
const UNKNOWN_BEDROOMS: &str = "Unknown bedrooms";
const ANY_BEDROOMS: &str = "Any";
const ANY_PRICE: &str = "Any price";
const POSTED_TODAY: &str = "Posted today";

/// Fixed link targets embedded in every alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertLinks {
    pub unsubscribe_base_url: String,
    pub listings_overview_url: String,
}

impl Default for AlertLinks {
    fn default() -> Self {
        Self {
            unsubscribe_base_url: DEFAULT_UNSUBSCRIBE_BASE_URL.into(),
            listings_overview_url: DEFAULT_LISTINGS_OVERVIEW_URL.into(),
        }
    }
}

impl AlertLinks {
    pub fn unsubscribe_url(&self, subscription_id: &str) -> String {
        format!(
            "{}?id={}",
            self.unsubscribe_base_url,
            urlencoding::encode(subscription_id)
        )
    }
}

/// Everything an alert email shows, already resolved to display text.
///
/// Serialized field names are those of the render endpoint's request body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContentModel {
    #[serde(rename = "price")]
    pub price_text: String,
    #[serde(rename = "bedrooms")]
    pub bedrooms_text: String,
    pub address: String,
    #[serde(rename = "description")]
    pub truncated_description: String,
    pub cover_image_url: Option<String>,
    pub listing_url: String,
    #[serde(rename = "subscriptionBedrooms")]
    pub subscription_bedrooms_text: String,
    #[serde(rename = "subscriptionPriceRange")]
    pub subscription_price_text: String,
    pub posted_at_text: Option<String>,
    pub unsubscribe_url: String,
    pub listings_overview_url: String,
}

impl EmailContentModel {
    pub fn build(
        listing: &ListingFacts,
        preferences: &SubscriptionPreferences,
        subscription_id: &str,
        links: &AlertLinks,
    ) -> Self {
        Self {
            price_text: price_text(listing),
            bedrooms_text: listing
                .bedroom_bucket()
                .map(|b| b.phrase().to_string())
                .unwrap_or_else(|| UNKNOWN_BEDROOMS.to_string()),
            address: listing
                .address
                .clone()
                .unwrap_or_else(|| ADDRESS_PLACEHOLDER.to_string()),
            truncated_description: truncate_description(
                listing
                    .description
                    .as_deref()
                    .unwrap_or(DESCRIPTION_PLACEHOLDER),
            ),
            cover_image_url: listing.image_url.clone().filter(|url| !url.is_empty()),
            listing_url: listing.listing_url.clone().unwrap_or_else(|| "#".into()),
            subscription_bedrooms_text: summarize(&preferences.bedroom_preferences, ANY_BEDROOMS),
            subscription_price_text: summarize(&preferences.price_preferences, ANY_PRICE),
            posted_at_text: Some(POSTED_TODAY.to_string()),
            unsubscribe_url: links.unsubscribe_url(subscription_id),
            listings_overview_url: links.listings_overview_url.clone(),
        }
    }

    pub fn subject(&self) -> String {
        format!("New TheCannon Match: {} - {}", self.price_text, self.address)
    }

    pub fn preview_text(&self) -> String {
        format!(
            "New listing on TheCannon matches your alerts: {} - {} - {}",
            self.price_text, self.bedrooms_text, self.address
        )
    }
}

fn price_text(listing: &ListingFacts) -> String {
    match (&listing.price_string, listing.price_int) {
        (Some(formatted), _) => formatted.clone(),
        (None, Some(price)) => format!("${price}"),
        (None, None) => "$Unknown".to_string(),
    }
}

fn summarize<T: Bucket>(preferences: &PreferenceSet<T>, any_text: &str) -> String {
    if preferences.is_any() {
        return any_text.to_string();
    }
    preferences
        .iter()
        .map(|b| b.phrase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cuts text longer than [`DESCRIPTION_LIMIT`] characters so that, with the
/// ellipsis appended, it is exactly the limit. Words may be split.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let keep = DESCRIPTION_LIMIT - ELLIPSIS.chars().count();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
