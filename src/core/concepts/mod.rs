//! Concept Insights: annotate text against a concept graph and rank the
//! detected concepts by relevance.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{Annotations, Concept, ScoredConcept};
pub use service::{ConceptInsights, DEFAULT_URL};
