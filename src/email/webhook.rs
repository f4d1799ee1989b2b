use serde::Serialize;

use super::{AlertLinks, truncate_description};
use crate::domain::ListingFacts;

const EMBED_COLOR: u32 = 0xEAB308;

/// Chat-webhook message announcing a matching listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub url: String,
    /// RFC 3339 time the match was found.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

impl WebhookMessage {
    /// `timestamp` is supplied by the caller (RFC 3339) so equal inputs build
    /// equal messages.
    pub fn for_listing(
        listing: &ListingFacts,
        subscription_id: &str,
        links: &AlertLinks,
        timestamp: &str,
    ) -> Self {
        let mut fields = vec![
            EmbedField::new(
                "Address",
                listing.address.as_deref().unwrap_or("Unknown address"),
                true,
            ),
            EmbedField::new(
                "Price",
                listing.price_string.as_deref().unwrap_or("Unknown price"),
                true,
            ),
            EmbedField::new(
                "Bedrooms",
                listing.bedroom_count.as_deref().unwrap_or("Unknown"),
                true,
            ),
        ];

        if let Some(description) = listing.description.as_deref().filter(|d| !d.is_empty()) {
            fields.push(EmbedField::new(
                "Description",
                truncate_description(description),
                false,
            ));
        }

        fields.push(EmbedField::new(
            "Manage Subscription",
            format!(
                "[Unsubscribe from alerts]({})",
                links.unsubscribe_url(subscription_id)
            ),
            false,
        ));

        let embed = Embed {
            title: "New TheCannon Listing Match!".into(),
            description: "A new listing matches your criteria".into(),
            color: EMBED_COLOR,
            fields,
            url: listing.listing_url.clone().unwrap_or_default(),
            timestamp: timestamp.to_string(),
            thumbnail: listing
                .image_url
                .clone()
                .filter(|url| !url.is_empty())
                .map(|url| Thumbnail { url }),
        };

        Self {
            embeds: vec![embed],
        }
    }
}
