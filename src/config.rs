//! Client configuration shared by all service facades.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WATSON_API_KEY";

/// Configuration for a Watson service facade.
///
/// Only `api_key` is required. Each service supplies its own default
/// endpoint; `endpoint` overrides it (useful for dedicated instances and for
/// tests against a mock server). `iam_endpoint` overrides the IAM token
/// exchange URL the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatsonConfig {
    /// IBM Cloud API key, exchanged for an IAM bearer token.
    pub api_key: String,

    /// Service endpoint override. `None` uses the service's default URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// IAM token endpoint override. `None` uses the IBM Cloud IAM URL.
    #[serde(default)]
    pub iam_endpoint: Option<String>,

    /// Per-request timeout in seconds (default 60).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds (default 30).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl WatsonConfig {
    /// Create a configuration with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read the API key from `WATSON_API_KEY`.
    ///
    /// Missing variable yields an empty key, which the facades reject at
    /// construction time.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Override the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the IAM token endpoint.
    pub fn with_iam_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.iam_endpoint = Some(endpoint.into());
        self
    }

    pub(crate) fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub(crate) fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}
