use super::{SubscriberEmail, WebhookUrl};

/// The single channel an alert is delivered through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMethod {
    Email(SubscriberEmail),
    Webhook(WebhookUrl),
}

impl ContactMethod {
    /// Wire tag of the variant, as sent to the subscription service.
    pub fn kind(&self) -> &'static str {
        match self {
            ContactMethod::Email(_) => "EMAIL",
            ContactMethod::Webhook(_) => "WEBHOOK",
        }
    }

    pub fn email(&self) -> Option<&SubscriberEmail> {
        match self {
            ContactMethod::Email(email) => Some(email),
            ContactMethod::Webhook(_) => None,
        }
    }

    pub fn webhook_url(&self) -> Option<&WebhookUrl> {
        match self {
            ContactMethod::Webhook(url) => Some(url),
            ContactMethod::Email(_) => None,
        }
    }
}
