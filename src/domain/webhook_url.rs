use reqwest::Url;
use validator::ValidateUrl;

/// An absolute URL with a scheme and a host that alerts can be posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookUrl(String);

impl WebhookUrl {
    pub fn parse(s: String) -> Result<Self, String> {
        let has_host = Url::parse(&s).is_ok_and(|url| url.host_str().is_some_and(|h| !h.is_empty()));

        if !s.validate_url() || !has_host {
            return Err(format!("{s} is not a valid webhook URL."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for WebhookUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
