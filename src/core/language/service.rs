//! Alchemy Language service facade.

use reqwest::Method;
use tracing::debug;

use super::models::{DocumentSentiment, RankedConcepts};
use crate::config::WatsonConfig;
use crate::core::base::ServiceClient;
use crate::errors::{WatsonError, WatsonResult};

/// Default Alchemy gateway endpoint.
pub const DEFAULT_URL: &str = "https://gateway-a.watsonplatform.net/calls";

const PATH_SENTIMENT: &str = "/text/TextGetTextSentiment";
const PATH_RANKED_CONCEPTS: &str = "/text/TextGetRankedConcepts";

/// Client for the Alchemy Language text-analysis service.
///
/// Each call POSTs form-encoded text to the Alchemy gateway and parses the
/// JSON result. The gateway reports failures inside a 200 body (`status:
/// "ERROR"`), which this facade folds into [`WatsonError::Service`].
pub struct AlchemyLanguage {
    client: ServiceClient,
}

impl AlchemyLanguage {
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

    /// Analyze the document-level sentiment of a text.
    pub async fn sentiment(&self, text: &str) -> WatsonResult<DocumentSentiment> {
        require_text(text)?;

        let url = self.client.url(PATH_SENTIMENT, &[])?;
        let request = self
            .client
            .request(Method::POST, url)
            .await?
            .form(&[("text", text), ("outputMode", "json")]);
        let response = self.client.send(request).await?;
        let sentiment: DocumentSentiment = ServiceClient::read_json(response).await?;

        check_alchemy_status(
            sentiment.status.as_deref(),
            sentiment.status_info.as_deref(),
        )?;
        debug!(polarity = ?sentiment.sentiment.as_ref().and_then(|s| s.polarity), "Sentiment analyzed");
        Ok(sentiment)
    }

    /// Extract ranked concepts, each with its knowledge-graph taxonomy path.
    pub async fn ranked_concepts(&self, text: &str) -> WatsonResult<RankedConcepts> {
        require_text(text)?;

        let url = self.client.url(PATH_RANKED_CONCEPTS, &[])?;
        let request = self
            .client
            .request(Method::POST, url)
            .await?
            .form(&[
                ("text", text),
                ("outputMode", "json"),
                ("knowledgeGraph", "1"),
            ]);
        let response = self.client.send(request).await?;
        let concepts: RankedConcepts = ServiceClient::read_json(response).await?;

        check_alchemy_status(concepts.status.as_deref(), concepts.status_info.as_deref())?;
        Ok(concepts)
    }
}

fn require_text(text: &str) -> WatsonResult<()> {
    if text.trim().is_empty() {
        return Err(WatsonError::InvalidArgument(
            "text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Fold an Alchemy in-body error status into a service error.
pub(crate) fn check_alchemy_status(
    status: Option<&str>,
    status_info: Option<&str>,
) -> WatsonResult<()> {
    match status {
        Some(status) if status.eq_ignore_ascii_case("error") => Err(WatsonError::Service {
            status: 200,
            body: status_info.unwrap_or("alchemy call failed").to_string(),
        }),
        _ => Ok(()),
    }
}
