//! IBM Cloud IAM authentication.
//!
//! Watson services authenticate with an IAM bearer token obtained by
//! exchanging the account API key at the IAM token endpoint. Tokens are
//! cached and refreshed shortly before they expire, so consecutive service
//! calls reuse one token instead of hitting IAM per request.

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::debug;
use url::form_urlencoded;

use crate::errors::{WatsonError, WatsonResult};

/// IBM Cloud IAM token endpoint.
pub const IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Refresh tokens this many seconds before the server-side expiry.
const EXPIRY_SAFETY_MARGIN_SECS: u64 = 300;

/// Minimum token lifetime assumed after subtracting the safety margin.
const MIN_TOKEN_LIFETIME_SECS: u64 = 60;

/// IAM access token with expiration tracking.
#[derive(Debug, Clone)]
struct IamToken {
    access_token: String,
    expires_at: Instant,
}

impl IamToken {
    /// Check if the token is expired or about to expire (within 60 seconds).
    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now() + Duration::from_secs(60)
    }
}

/// IAM token response from IBM Cloud.
#[derive(Debug, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    expires_in: u64,
}

/// Exchanges an API key for IAM bearer tokens and caches the result.
#[derive(Debug)]
pub struct IamTokenManager {
    api_key: String,
    token_url: String,
    http: Client,
    token: RwLock<Option<IamToken>>,
}

impl IamTokenManager {
    /// Create a token manager for the given API key.
    ///
    /// `token_url` overrides the IBM Cloud IAM endpoint; pass `None` outside
    /// of tests.
    pub fn new(api_key: impl Into<String>, token_url: Option<String>) -> WatsonResult<Self> {
        // Dedicated client with explicit timeouts to prevent indefinite hangs
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                WatsonError::AuthenticationFailed(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            api_key: api_key.into(),
            token_url: token_url.unwrap_or_else(|| IAM_URL.to_string()),
            http,
            token: RwLock::new(None),
        })
    }

    /// Get a valid bearer token, refreshing the cached one if necessary.
    pub async fn token(&self) -> WatsonResult<String> {
        {
            let token_guard = self.token.read().await;
            if let Some(token) = token_guard.as_ref()
                && !token.is_expired()
            {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Fetching new IAM token");
        let new_token = self.fetch_token().await?;
        let access_token = new_token.access_token.clone();

        *self.token.write().await = Some(new_token);

        Ok(access_token)
    }

    /// Fetch a fresh token from the IAM endpoint.
    async fn fetch_token(&self) -> WatsonResult<IamToken> {
        let encoded_api_key: String =
            form_urlencoded::byte_serialize(self.api_key.as_bytes()).collect();

        let response = self
            .http
            .post(&self.token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!(
                "grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey={encoded_api_key}"
            ))
            .send()
            .await
            .map_err(|e| {
                WatsonError::AuthenticationFailed(format!("Failed to request IAM token: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(WatsonError::AuthenticationFailed(format!(
                "IAM token request failed ({status}): {body}"
            )));
        }

        let token_response: IamTokenResponse = response.json().await.map_err(|e| {
            WatsonError::AuthenticationFailed(format!("Failed to parse IAM token: {e}"))
        })?;

        // Use saturating_sub to avoid underflow if expires_in is unexpectedly small
        let lifetime = token_response
            .expires_in
            .saturating_sub(EXPIRY_SAFETY_MARGIN_SECS)
            .max(MIN_TOKEN_LIFETIME_SECS);
        let expires_at = Instant::now() + Duration::from_secs(lifetime);

        debug!("IAM token fetched, usable for {} seconds", lifetime);

        Ok(IamToken {
            access_token: token_response.access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_not_expired() {
        let token = IamToken {
            access_token: "tok".into(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_near_expiry_is_expired() {
        let token = IamToken {
            access_token: "tok".into(),
            expires_at: Instant::now() + Duration::from_secs(30),
        };
        assert!(token.is_expired());
    }

    #[test]
    fn test_manager_defaults_to_iam_url() {
        let manager = IamTokenManager::new("key", None).unwrap();
        assert_eq!(manager.token_url, IAM_URL);
    }

    #[test]
    fn test_manager_honors_override() {
        let manager =
            IamTokenManager::new("key", Some("http://localhost:1234/token".into())).unwrap();
        assert_eq!(manager.token_url, "http://localhost:1234/token");
    }
}
