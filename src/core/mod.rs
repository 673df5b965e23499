//! Service facades, one module per Watson API area.

mod base;

pub mod concepts;
pub mod language;
pub mod speech_to_text;
pub mod vision;

// Re-export commonly used types for convenience
pub use concepts::{Annotations, Concept, ConceptInsights, ScoredConcept};
pub use language::{
    AlchemyLanguage, DocumentSentiment, KnowledgeGraph, RankedConcept, RankedConcepts, Sentiment,
    SentimentType,
};
pub use speech_to_text::{
    RecognizeOptions, SessionStatus, SpeechAlternative, SpeechModel, SpeechResults, SpeechSession,
    SpeechToText, Transcript,
};
pub use vision::{Age, AlchemyVision, Gender, ImageFace, ImageFaces};
