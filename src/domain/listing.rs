use super::{BedroomBucket, Bucket, PriceBucket};

/// What the crawler knows about a rental listing. Every field may be
/// missing; consumers substitute placeholders instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ListingFacts {
    /// Price exactly as the listing displays it, e.g. `"$1,250"`.
    pub price_string: Option<String>,
    pub price_int: Option<i64>,
    /// Bedroom bucket code. Crawlers send `"UNKNOWN"` when the count is unreadable.
    pub bedroom_bucket: Option<String>,
    /// Raw bedroom text, e.g. `"2 bed"`.
    pub bedroom_count: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub listing_url: Option<String>,
}

impl ListingFacts {
    pub fn bedroom_bucket(&self) -> Option<BedroomBucket> {
        match self.bedroom_bucket.as_deref().and_then(BedroomBucket::parse) {
            Some(bucket) => Some(bucket),
            None => self
                .bedroom_count
                .as_deref()
                .and_then(BedroomBucket::from_count_text),
        }
    }

    pub fn price_bucket(&self) -> Option<PriceBucket> {
        self.price_int.and_then(PriceBucket::from_price)
    }
}

/// The filters one subscriber chose.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPreferences {
    pub bedroom_preferences: super::PreferenceSet<BedroomBucket>,
    pub price_preferences: super::PreferenceSet<PriceBucket>,
}

impl SubscriptionPreferences {
    /// A listing matches when it passes both the bedroom and the price filter.
    pub fn matches(&self, listing: &ListingFacts) -> bool {
        self.bedroom_preferences.matches(listing.bedroom_bucket())
            && self.price_preferences.matches(listing.price_bucket())
    }
}
