//! Shared HTTP plumbing for the service facades.
//!
//! Every facade owns a [`ServiceClient`]: a pooled reqwest client, the
//! resolved service endpoint, and an IAM token manager. Facades build a URL
//! from path constants and query pairs, execute one request, and hand the
//! response to [`ServiceClient::read_json`]. Status classification lives in
//! [`WatsonError::from_status`]; nothing here retries.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::auth::IamTokenManager;
use crate::config::WatsonConfig;
use crate::errors::{WatsonError, WatsonResult};

pub struct ServiceClient {
    http: Client,
    endpoint: String,
    auth: IamTokenManager,
}

impl ServiceClient {
    /// Build a client for one service.
    ///
    /// Fails fast on an empty API key so no facade can be constructed
    /// without credentials.
    pub(crate) fn new(config: &WatsonConfig, default_endpoint: &str) -> WatsonResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(WatsonError::AuthenticationFailed(
                "API key is required".to_string(),
            ));
        }

        let endpoint = config
            .endpoint
            .as_deref()
            .unwrap_or(default_endpoint)
            .trim_end_matches('/')
            .to_string();

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs()))
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| WatsonError::Internal(format!("Failed to create HTTP client: {e}")))?;

        let auth = IamTokenManager::new(config.api_key.clone(), config.iam_endpoint.clone())?;

        Ok(Self {
            http,
            endpoint,
            auth,
        })
    }

    /// The resolved service endpoint (no trailing slash).
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Join a path and query pairs onto the endpoint.
    pub(crate) fn url(&self, path: &str, params: &[(String, String)]) -> WatsonResult<Url> {
        let base = format!("{}{}", self.endpoint, path);
        let url = if params.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, params)
        };
        url.map_err(|e| WatsonError::Internal(format!("Failed to build URL: {e}")))
    }

    /// Start a request with a fresh bearer token attached.
    pub(crate) async fn request(&self, method: Method, url: Url) -> WatsonResult<RequestBuilder> {
        let token = self.auth.token().await?;
        debug!(method = %method, url = %url, "Dispatching Watson request");
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    /// Execute a prepared request.
    pub(crate) async fn send(&self, request: RequestBuilder) -> WatsonResult<Response> {
        request
            .send()
            .await
            .map_err(|e| WatsonError::Network(format!("Request failed: {e}")))
    }

    /// Reject non-success responses, reading the body into the error.
    pub(crate) async fn check_status(response: Response) -> WatsonResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Watson service returned error");
        Err(WatsonError::from_status(status, body))
    }

    /// Check status and deserialize the JSON body.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> WatsonResult<T> {
        let response = Self::check_status(response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| WatsonError::Network(format!("Failed to read response: {e}")))?;
        serde_json::from_str(&text).map_err(|e| WatsonError::Deserialization(e.to_string()))
    }

    /// GET a path and deserialize the JSON body. The common read shape.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> WatsonResult<T> {
        let url = self.url(path, params)?;
        let request = self.request(Method::GET, url).await?;
        let response = self.send(request).await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServiceClient {
        ServiceClient::new(
            &WatsonConfig::new("test-key"),
            "https://stream.watsonplatform.net/speech-to-text/api",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = ServiceClient::new(&WatsonConfig::new(""), "https://example.com");
        assert!(matches!(
            result,
            Err(WatsonError::AuthenticationFailed(_))
        ));

        let result = ServiceClient::new(&WatsonConfig::new("   "), "https://example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_default_and_override() {
        let client = client();
        assert_eq!(
            client.endpoint(),
            "https://stream.watsonplatform.net/speech-to-text/api"
        );

        let config = WatsonConfig::new("test-key").with_endpoint("http://localhost:9000/");
        let client = ServiceClient::new(&config, "https://example.com").unwrap();
        // Trailing slash is stripped so path joins stay clean.
        assert_eq!(client.endpoint(), "http://localhost:9000");
    }

    #[test]
    fn test_url_without_params() {
        let url = client().url("/v1/models", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://stream.watsonplatform.net/speech-to-text/api/v1/models"
        );
    }

    #[test]
    fn test_url_with_params() {
        let params = vec![("model".to_string(), "en-US_BroadbandModel".to_string())];
        let url = client().url("/v1/sessions", &params).unwrap();
        assert!(url.as_str().contains("/v1/sessions?"));
        assert!(url.as_str().contains("model=en-US_BroadbandModel"));
    }
}
