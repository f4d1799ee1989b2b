use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::email::AlertLinks;
use crate::subscription_client::SubscriptionClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub alerts: AlertLinkSettings,
    pub subscription_service: SubscriptionServiceSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AlertLinkSettings {
    pub unsubscribe_base_url: String,
    pub listings_overview_url: String,
}

impl AlertLinkSettings {
    pub fn links(&self) -> AlertLinks {
        AlertLinks {
            unsubscribe_base_url: self.unsubscribe_base_url.clone(),
            listings_overview_url: self.listings_overview_url.clone(),
        }
    }
}

/// Where validated subscriptions are handed off. The local and hosted
/// endpoints differ only by environment file.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SubscriptionServiceSettings {
    pub base_url: String,
    pub create_path: String,
    pub auth_token: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl SubscriptionServiceSettings {
    pub fn client(self) -> Result<SubscriptionClient, anyhow::Error> {
        let timeout = self.timeout();
        SubscriptionClient::new(&self.base_url, &self.create_path, self.auth_token, timeout)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine current directory: {e}"))
    })?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")).required(true))
        .add_source(config::File::from(conf_dir.join(env.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
