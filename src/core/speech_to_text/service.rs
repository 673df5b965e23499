//! Speech-to-Text service facade.

use std::path::Path;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::config::{PARAM_MODEL, RecognizeOptions};
use super::models::{SessionStatus, SpeechModel, SpeechModelSet, SpeechResults, SpeechSession};
use crate::config::WatsonConfig;
use crate::core::base::ServiceClient;
use crate::errors::{WatsonError, WatsonResult};
use crate::utils::media_type::{is_valid_audio_type, media_type_from_path};

/// Default Speech-to-Text endpoint.
pub const DEFAULT_URL: &str = "https://stream.watsonplatform.net/speech-to-text/api";

/// Maximum audio upload size (100 MB), checked before any request.
pub const MAX_AUDIO_SIZE_BYTES: u64 = 100 * 1024 * 1024;

const PATH_SESSIONS: &str = "/v1/sessions";
const PATH_MODELS: &str = "/v1/models";
const PATH_RECOGNIZE: &str = "/v1/recognize";

/// Name of the session affinity cookie.
const SESSION_COOKIE: &str = "SESSIONID";

/// Response envelope of the recognize-status endpoint.
#[derive(Debug, Deserialize)]
struct SessionStatusEnvelope {
    session: Option<SessionStatus>,
}

/// Client for the Watson Speech-to-Text service.
///
/// Converts speech audio into text. Each method issues one HTTP request
/// against the service endpoint and blocks (awaits) until the response
/// arrives or the call fails; there is no retry or partial-result handling.
///
/// # Example
///
/// ```rust,no_run
/// use watson_client::config::WatsonConfig;
/// use watson_client::core::speech_to_text::{RecognizeOptions, SpeechToText};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = SpeechToText::new(&WatsonConfig::from_env())?;
///
///     let session = service.create_session(Some("en-US_BroadbandModel")).await?;
///
///     let options = RecognizeOptions::new()
///         .with_session(&session)
///         .with_word_confidence(true)
///         .with_max_alternatives(3);
///     let results = service
///         .recognize("speech.wav".as_ref(), Some(&options))
///         .await?;
///     if let Some(transcript) = results.best_transcript() {
///         println!("{transcript}");
///     }
///
///     service.delete_session(&session).await?;
///     Ok(())
/// }
/// ```
pub struct SpeechToText {
    client: ServiceClient,
}

impl SpeechToText {
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

    /// Create a session that pins recognition calls to one engine.
    ///
    /// The session accepts one recognition task at a time and expires after
    /// 15 minutes of inactivity, both enforced server-side.
    pub async fn create_session(&self, model: Option<&str>) -> WatsonResult<SpeechSession> {
        let mut params = Vec::new();
        if let Some(model) = model {
            params.push((PARAM_MODEL.to_string(), model.to_string()));
        }

        let url = self.client.url(PATH_SESSIONS, &params)?;
        let request = self.client.request(Method::POST, url).await?;
        let response = self.client.send(request).await?;
        let session: SpeechSession = ServiceClient::read_json(response).await?;

        info!(session_id = ?session.session_id, "Created speech session");
        Ok(session)
    }

    /// Delete a session.
    ///
    /// Succeeds only on a 204 No Content response; anything else is an
    /// error.
    pub async fn delete_session(&self, session: &SpeechSession) -> WatsonResult<()> {
        let id = required_session_id(session)?;

        let url = self.client.url(&format!("{PATH_SESSIONS}/{id}"), &[])?;
        let mut request = self.client.request(Method::DELETE, url).await?;
        if let Some(cookie) = session.cookie_session.as_deref() {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }

        let response = self.client.send(request).await?;
        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(WatsonError::Service {
                status: status.as_u16(),
                body: if body.is_empty() {
                    "could not delete session".to_string()
                } else {
                    body
                },
            });
        }

        info!(session_id = %id, "Deleted speech session");
        Ok(())
    }

    /// Get one recognition model by name.
    pub async fn model(&self, name: &str) -> WatsonResult<SpeechModel> {
        if name.trim().is_empty() {
            return Err(WatsonError::InvalidArgument(
                "model name was not specified".to_string(),
            ));
        }

        self.client
            .get_json(&format!("{PATH_MODELS}/{name}"), &[])
            .await
    }

    /// List all recognition models.
    pub async fn models(&self) -> WatsonResult<Vec<SpeechModel>> {
        let set: SpeechModelSet = self.client.get_json(PATH_MODELS, &[]).await?;
        Ok(set.models)
    }

    /// Get the recognition status of a session.
    ///
    /// The returned state must be `initialized` before the session can take
    /// another recognition task; concurrent tasks on one session are
    /// rejected server-side.
    pub async fn recognize_status(&self, session: &SpeechSession) -> WatsonResult<SessionStatus> {
        let id = required_session_id(session)?;

        let url = self
            .client
            .url(&format!("{PATH_SESSIONS}/{id}/recognize"), &[])?;
        let mut request = self.client.request(Method::GET, url).await?;
        if let Some(cookie) = session.cookie_session.as_deref() {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }

        let response = self.client.send(request).await?;
        let envelope: SessionStatusEnvelope = ServiceClient::read_json(response).await?;
        envelope.session.ok_or_else(|| {
            WatsonError::Deserialization("response did not contain a session object".to_string())
        })
    }

    /// Recognize an audio file.
    ///
    /// The file must exist, be under [`MAX_AUDIO_SIZE_BYTES`], and carry a
    /// valid `audio/*` media type — explicit in `options` or inferred from
    /// the file extension. All three are checked before any network call.
    /// When `options.session_id` is set the request is routed to the
    /// session-scoped path.
    pub async fn recognize(
        &self,
        audio: &Path,
        options: Option<&RecognizeOptions>,
    ) -> WatsonResult<SpeechResults> {
        let metadata = tokio::fs::metadata(audio).await.map_err(|_| {
            WatsonError::InvalidArgument(format!(
                "audio file {} does not exist",
                audio.display()
            ))
        })?;
        if !metadata.is_file() {
            return Err(WatsonError::InvalidArgument(format!(
                "{} is not a file",
                audio.display()
            )));
        }
        if metadata.len() > MAX_AUDIO_SIZE_BYTES {
            return Err(WatsonError::InvalidArgument(
                "the audio file is greater than 100MB".to_string(),
            ));
        }

        let content_type = options
            .and_then(|o| o.content_type.clone())
            .or_else(|| media_type_from_path(audio).map(String::from))
            .ok_or_else(|| {
                WatsonError::InvalidArgument("audio format cannot be recognized".to_string())
            })?;
        if !is_valid_audio_type(&content_type) {
            return Err(WatsonError::InvalidArgument(format!(
                "{content_type} is not a valid audio media type; valid formats start with 'audio/'"
            )));
        }

        let session_id = options
            .and_then(|o| o.session_id.as_deref())
            .filter(|id| !id.is_empty());
        let path = match session_id {
            Some(id) => format!("{PATH_SESSIONS}/{id}/recognize"),
            None => PATH_RECOGNIZE.to_string(),
        };

        let params = options.map(RecognizeOptions::query_params).unwrap_or_default();
        let url = self.client.url(&path, &params)?;

        let body = tokio::fs::read(audio).await.map_err(|e| {
            WatsonError::Internal(format!("failed to read audio file: {e}"))
        })?;
        debug!(
            bytes = body.len(),
            content_type = %content_type,
            session = ?session_id,
            "Uploading audio for recognition"
        );

        let mut request = self
            .client
            .request(Method::POST, url)
            .await?
            .header(CONTENT_TYPE, content_type.as_str())
            .body(Bytes::from(body));
        if let Some(cookie) = options.and_then(|o| o.session_cookie.as_deref()) {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={cookie}"));
        }

        let response = self.client.send(request).await?;
        ServiceClient::read_json(response).await
    }
}

/// The session id, or an argument error when absent.
fn required_session_id(session: &SpeechSession) -> WatsonResult<&str> {
    session
        .session_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| WatsonError::InvalidArgument("session was not specified".to_string()))
}
