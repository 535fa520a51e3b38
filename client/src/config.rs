use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.neuroswitch.com";

/// Connection settings for the NeuroSwitch API.
///
/// The base URL never ends with `/`, so endpoint paths can be appended with a
/// single separator.
#[derive(Clone, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct RawClientConfig {
    api_key: String,
    base_url: Option<String>,
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        match raw.base_url {
            Some(base_url) => ClientConfig::with_base_url(raw.api_key, base_url),
            None => ClientConfig::new(raw.api_key),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
