//! Recognition request options.

use serde::{Deserialize, Serialize};

use super::models::SpeechSession;

// Query parameter names understood by the recognize endpoints.
pub(crate) const PARAM_CONTINUOUS: &str = "continuous";
pub(crate) const PARAM_INACTIVITY_TIMEOUT: &str = "inactivity_timeout";
pub(crate) const PARAM_MAX_ALTERNATIVES: &str = "max_alternatives";
pub(crate) const PARAM_MODEL: &str = "model";
pub(crate) const PARAM_TIMESTAMPS: &str = "timestamps";
pub(crate) const PARAM_WORD_CONFIDENCE: &str = "word_confidence";

/// Options for a recognition request.
///
/// Every option is independent and optional; only set options become query
/// parameters. `session_id` routes the request to a session-scoped path
/// instead of the stateless one, and `content_type` overrides the media type
/// otherwise inferred from the audio file's extension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecognizeOptions {
    /// Return word-level confidence scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_confidence: Option<bool>,

    /// Keep transcribing across pauses instead of stopping at the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<bool>,

    /// Maximum number of alternative hypotheses per result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_alternatives: Option<u32>,

    /// Return word-level timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<bool>,

    /// Seconds of silence after which the service ends the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivity_timeout: Option<i32>,

    /// Recognition model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Session to route the request to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Affinity cookie for the session, sent as a `Cookie` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,

    /// Media type of the audio, e.g. `audio/wav`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl RecognizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_confidence(mut self, word_confidence: bool) -> Self {
        self.word_confidence = Some(word_confidence);
        self
    }

    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = Some(continuous);
        self
    }

    pub fn with_max_alternatives(mut self, max_alternatives: u32) -> Self {
        self.max_alternatives = Some(max_alternatives);
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    pub fn with_inactivity_timeout(mut self, seconds: i32) -> Self {
        self.inactivity_timeout = Some(seconds);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Route the request through an existing session, carrying its affinity
    /// cookie along.
    pub fn with_session(mut self, session: &SpeechSession) -> Self {
        self.session_id = session.session_id.clone();
        self.session_cookie = session.cookie_session.clone();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Query parameter pairs for the set options, in a stable order.
    ///
    /// `session_id`, `session_cookie`, and `content_type` shape the request
    /// itself and never appear as query parameters.
    pub(crate) fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(word_confidence) = self.word_confidence {
            params.push((PARAM_WORD_CONFIDENCE.into(), word_confidence.to_string()));
        }
        if let Some(continuous) = self.continuous {
            params.push((PARAM_CONTINUOUS.into(), continuous.to_string()));
        }
        if let Some(max_alternatives) = self.max_alternatives {
            params.push((PARAM_MAX_ALTERNATIVES.into(), max_alternatives.to_string()));
        }
        if let Some(timestamps) = self.timestamps {
            params.push((PARAM_TIMESTAMPS.into(), timestamps.to_string()));
        }
        if let Some(timeout) = self.inactivity_timeout {
            params.push((PARAM_INACTIVITY_TIMEOUT.into(), timeout.to_string()));
        }
        if let Some(ref model) = self.model {
            params.push((PARAM_MODEL.into(), model.clone()));
        }

        params
    }
}
