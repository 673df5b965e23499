//! Concept Insights service facade.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::models::Annotations;
use crate::config::WatsonConfig;
use crate::core::base::ServiceClient;
use crate::errors::{WatsonError, WatsonResult};

/// Default Concept Insights endpoint.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/concept-insights/api";

/// Client for the Concept Insights service.
///
/// Annotates text against a concept graph, returning the concepts the text
/// mentions together with relevance scores.
pub struct ConceptInsights {
    client: ServiceClient,
}

impl ConceptInsights {
    /// Create the facade. Fails on an empty API key.
    pub fn new(config: &WatsonConfig) -> WatsonResult<Self> {
        Ok(Self {
            client: ServiceClient::new(config, DEFAULT_URL)?,
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Annotate a text against the graph `/graphs/{account}/{graph}`.
    ///
    /// The text is uploaded as `text/plain`; the response lists each
    /// detected concept with its relevance score.
    pub async fn annotate_text(
        &self,
        account: &str,
        graph: &str,
        text: &str,
    ) -> WatsonResult<Annotations> {
        require_argument(account, "account")?;
        require_argument(graph, "graph")?;
        require_argument(text, "text")?;

        let path = format!("/v2/graphs/{account}/{graph}/annotate_text");
        let url = self.client.url(&path, &[])?;

        debug!(account = %account, graph = %graph, chars = text.len(), "Annotating text");

        let request = self
            .client
            .request(Method::POST, url)
            .await?
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_string());
        let response = self.client.send(request).await?;
        ServiceClient::read_json(response).await
    }
}

fn require_argument(value: &str, name: &str) -> WatsonResult<()> {
    if value.trim().is_empty() {
        return Err(WatsonError::InvalidArgument(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(())
}
