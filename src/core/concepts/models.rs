//! Concept Insights model types.

use serde::{Deserialize, Serialize};

use crate::utils::json::display_as_json;

/// A concept node in a concept graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Concept {
    /// Concept identifier, e.g. `/graphs/wikipedia/en-20120601/concepts/IBM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short abstract describing the concept.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Concept {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A concept with its relevance weight for the annotated text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoredConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Concept>,

    /// Relevance weight (0.0 to 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl ScoredConcept {
    pub fn with_concept(mut self, concept: Concept) -> Self {
        self.concept = Some(concept);
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Annotation result envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub annotations: Vec<ScoredConcept>,
}

display_as_json!(Concept, ScoredConcept, Annotations);
