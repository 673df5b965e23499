//! Alchemy Language text analysis: document sentiment and ranked concept
//! tags with knowledge-graph taxonomy paths.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    DocumentSentiment, KnowledgeGraph, RankedConcept, RankedConcepts, Sentiment, SentimentType,
};
pub use service::{AlchemyLanguage, DEFAULT_URL};

pub(crate) use service::check_alchemy_status;
