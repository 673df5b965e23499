//! Watson Speech-to-Text service client.
//!
//! Converts speech audio into text over the service's REST interface.
//!
//! # Operations
//!
//! - Session lifecycle: create a session to pin recognition calls to one
//!   engine, poll its recognition status, delete it when done
//! - Model catalog: fetch one model by name or list all models
//! - Recognition: upload an audio file (WAV, FLAC, OGG/Opus, raw PCM) and
//!   receive transcription results with optional word confidence scores,
//!   timestamps, and alternative hypotheses
//!
//! # Example
//!
//! ```rust,no_run
//! use watson_client::config::WatsonConfig;
//! use watson_client::core::speech_to_text::SpeechToText;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = SpeechToText::new(&WatsonConfig::from_env())?;
//!     let results = service.recognize("speech.wav".as_ref(), None).await?;
//!     println!("{results}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod models;
mod service;


pub use config::RecognizeOptions;
pub use models::{
    STATE_INITIALIZED, SessionStatus, SpeechAlternative, SpeechModel, SpeechResults,
    SpeechSession, Transcript, WordConfidence, WordTimestamp,
};
pub use service::{DEFAULT_URL, MAX_AUDIO_SIZE_BYTES, SpeechToText};
