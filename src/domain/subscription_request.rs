use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{
    BedroomBucket, Bucket, ContactMethod, PreferenceSet, PreferenceSetError, PriceBucket,
    SubscriberEmail, SubscriptionPreferences, WebhookUrl,
};

const CONTACT_REQUIRED: &str =
    "Email is required for email notifications, webhook URL is required for webhook notifications";
const INVALID_CONTACT_TYPE: &str = "Choose either EMAIL or WEBHOOK as the contact method";
const INVALID_EMAIL: &str = "Please enter a valid email address";
const INVALID_WEBHOOK_URL: &str = "Please enter a valid webhook URL";

/// Raw subscription form as submitted by a client, before any checks.
///
/// Deserialization never fails on field shapes: a mistyped or `null` field
/// reads as absent (or, inside a preference array, as its JSON text) so that
/// [`validate`] can report it under the field it belongs to.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionForm {
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub contact_type: String,
    #[serde(default, deserialize_with = "text_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub webhook_url: Option<String>,
    #[serde(default, deserialize_with = "codes_or_empty")]
    pub bedroom_preferences: Vec<String>,
    #[serde(default, deserialize_with = "codes_or_empty")]
    pub price_preferences: Vec<String>,
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_none(deserializer).map(Option::unwrap_or_default)
}

fn codes_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| match item {
                Value::String(code) => code,
                other => other.to_string(),
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Email,
    WebhookUrl,
    BedroomPreferences,
    PricePreferences,
}

/// Human-readable messages keyed by the form field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: FormField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field:?}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A subscription that passed validation and is ready to be handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub contact_method: ContactMethod,
    pub bedroom_preferences: PreferenceSet<BedroomBucket>,
    pub price_preferences: PreferenceSet<PriceBucket>,
}

impl SubscriptionRequest {
    pub fn preferences(&self) -> SubscriptionPreferences {
        SubscriptionPreferences {
            bedroom_preferences: self.bedroom_preferences.clone(),
            price_preferences: self.price_preferences.clone(),
        }
    }
}

impl TryFrom<SubscriptionForm> for SubscriptionRequest {
    type Error = ValidationErrors;

    fn try_from(form: SubscriptionForm) -> Result<Self, Self::Error> {
        validate(&form)
    }
}

/// Checks every rule independently and reports all failures at once.
pub fn validate(form: &SubscriptionForm) -> Result<SubscriptionRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let contact_method = parse_contact_method(form, &mut errors);
    let bedroom_preferences = parse_preferences::<BedroomBucket>(
        &form.bedroom_preferences,
        "bedroom",
        FormField::BedroomPreferences,
        &mut errors,
    );
    let price_preferences = parse_preferences::<PriceBucket>(
        &form.price_preferences,
        "price",
        FormField::PricePreferences,
        &mut errors,
    );

    match (contact_method, bedroom_preferences, price_preferences) {
        (Some(contact_method), Some(bedroom_preferences), Some(price_preferences))
            if errors.is_empty() =>
        {
            Ok(SubscriptionRequest {
                contact_method,
                bedroom_preferences,
                price_preferences,
            })
        }
        _ => Err(errors),
    }
}

fn parse_contact_method(
    form: &SubscriptionForm,
    errors: &mut ValidationErrors,
) -> Option<ContactMethod> {
    let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

    match form.contact_type.as_str() {
        "EMAIL" => match non_empty(&form.email) {
            None => errors.add(FormField::Email, CONTACT_REQUIRED),
            Some(email) => match SubscriberEmail::parse(email) {
                Ok(email) => return Some(ContactMethod::Email(email)),
                Err(_) => errors.add(FormField::Email, INVALID_EMAIL),
            },
        },
        "WEBHOOK" => match non_empty(&form.webhook_url) {
            None => errors.add(FormField::Email, CONTACT_REQUIRED),
            Some(url) => match WebhookUrl::parse(url) {
                Ok(url) => return Some(ContactMethod::Webhook(url)),
                Err(_) => errors.add(FormField::WebhookUrl, INVALID_WEBHOOK_URL),
            },
        },
        _ => errors.add(FormField::Email, INVALID_CONTACT_TYPE),
    }
    None
}

fn parse_preferences<T: Bucket>(
    codes: &[String],
    axis: &str,
    field: FormField,
    errors: &mut ValidationErrors,
) -> Option<PreferenceSet<T>> {
    let mut values = Vec::with_capacity(codes.len());
    let mut valid = true;

    for code in codes {
        match T::parse(code) {
            Some(value) => values.push(value),
            None => {
                errors.add(field, format!("'{code}' is not a valid {axis} option"));
                valid = false;
            }
        }
    }
    if !valid {
        return None;
    }

    match PreferenceSet::parse(values) {
        Ok(set) => Some(set),
        Err(PreferenceSetError::Empty) => {
            errors.add(field, format!("Select at least one {axis} option"));
            None
        }
        Err(PreferenceSetError::MixedWildcard) => {
            errors.add(
                field,
                format!("'Any' cannot be combined with specific {axis} options"),
            );
            None
        }
    }
}
