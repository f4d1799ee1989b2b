mod bedroom_bucket;
mod bucket;
mod contact_method;
mod listing;
mod preference_set;
mod price_bucket;
mod subscriber_email;
mod subscription_request;
mod webhook_url;

pub use bedroom_bucket::BedroomBucket;
pub use bucket::{Bucket, label_for_code, options};
pub use contact_method::ContactMethod;
pub use listing::{ListingFacts, SubscriptionPreferences};
pub use preference_set::{PreferenceSet, PreferenceSetError};
pub use price_bucket::PriceBucket;
pub use subscriber_email::SubscriberEmail;
pub use subscription_request::{
    FormField, SubscriptionForm, SubscriptionRequest, ValidationErrors, validate,
};
pub use webhook_url::WebhookUrl;
