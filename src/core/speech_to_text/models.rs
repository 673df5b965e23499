//! Speech-to-Text model types.
//!
//! Flat value objects mirroring the service's JSON schemas. Every field is
//! optional and deserialized permissively; absent fields stay `None` and are
//! skipped on serialization, so a serialize/deserialize round trip preserves
//! structural equality. `Display` renders pretty-printed JSON for all types.

use serde::{Deserialize, Serialize};

use crate::utils::json::display_as_json;

/// Word-level timestamp `[word, start_time, end_time]`.
pub type WordTimestamp = (String, f64, f64);

/// Word-level confidence `[word, confidence]`.
pub type WordConfidence = (String, f64);

/// Session state reported when the engine is ready for a recognition task.
pub const STATE_INITIALIZED: &str = "initialized";

// =============================================================================
// Sessions
// =============================================================================

/// A recognition session.
///
/// Created by `create_session`; pins subsequent recognition calls to one
/// backend engine. The service expires the session after 15 minutes of
/// inactivity. `cookie_session` carries the affinity cookie sent back on
/// session-scoped requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeechSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_session_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognize: Option<String>,

    #[serde(rename = "recognizeWS", skip_serializing_if = "Option::is_none")]
    pub recognize_ws: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observe_result: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_session: Option<String>,
}

impl SpeechSession {
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_cookie_session(mut self, cookie_session: impl Into<String>) -> Self {
        self.cookie_session = Some(cookie_session.into());
        self
    }
}

/// Status of a session's recognition engine.
///
/// `state` must be [`STATE_INITIALIZED`] before the session can accept
/// another recognition task; the state machine itself lives server-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognize: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observe_result: Option<String>,

    #[serde(rename = "recognizeWS", skip_serializing_if = "Option::is_none")]
    pub recognize_ws: Option<String>,
}

impl SessionStatus {
    /// True when the session is ready for a new recognition task.
    pub fn is_initialized(&self) -> bool {
        self.state.as_deref() == Some(STATE_INITIALIZED)
    }
}

// =============================================================================
// Models
// =============================================================================

/// A speech recognition model offered by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeechModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sampling rate the model was trained for, in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<String>,
}

impl SpeechModel {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = Some(rate);
        self
    }
}

/// Wire envelope for the model list.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SpeechModelSet {
    #[serde(default)]
    pub models: Vec<SpeechModel>,
}

// =============================================================================
// Recognition results
// =============================================================================

/// Transcription results for one recognition request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeechResults {
    #[serde(default)]
    pub results: Vec<Transcript>,

    #[serde(default)]
    pub result_index: i32,
}

impl SpeechResults {
    /// Best transcript of the most recent result, if any.
    pub fn best_transcript(&self) -> Option<&str> {
        self.results
            .last()
            .and_then(Transcript::best_alternative)
            .and_then(|alt| alt.transcript.as_deref())
    }
}

/// One recognized utterance with its alternative hypotheses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,

    /// Whether this result is final (not subject to change).
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

impl Transcript {
    /// The highest-ranked alternative.
    pub fn best_alternative(&self) -> Option<&SpeechAlternative> {
        self.alternatives.first()
    }
}

/// A transcription hypothesis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeechAlternative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// Confidence score (0.0 to 1.0), present on final results only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Word-level timestamps: `[[word, start, end], ...]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<WordTimestamp>>,

    /// Word-level confidence scores: `[[word, confidence], ...]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_confidence: Option<Vec<WordConfidence>>,
}

impl SpeechAlternative {
    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

display_as_json!(
    SpeechSession,
    SessionStatus,
    SpeechModel,
    SpeechResults,
    Transcript,
    SpeechAlternative,
);
