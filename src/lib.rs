//! Client SDK for IBM Watson cloud cognitive services.
//!
//! Each Watson API area gets one facade: [`SpeechToText`] for speech
//! recognition, [`AlchemyLanguage`] for text sentiment and concept tagging,
//! [`AlchemyVision`] for face detection, and [`ConceptInsights`] for
//! concept-graph annotation. Facades marshal typed parameters into HTTP
//! requests against fixed REST endpoints and unmarshal the JSON responses
//! into model objects; authentication is IBM Cloud IAM with a cached bearer
//! token.
//!
//! # Example
//!
//! ```rust,no_run
//! use watson_client::config::WatsonConfig;
//! use watson_client::core::language::AlchemyLanguage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let language = AlchemyLanguage::new(&WatsonConfig::from_env())?;
//!     let sentiment = language.sentiment("IBM Watson won Jeopardy!").await?;
//!     println!("{sentiment}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod errors;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use config::WatsonConfig;
pub use errors::{WatsonError, WatsonResult};
