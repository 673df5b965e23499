//! Alchemy Language model types.

use serde::{Deserialize, Serialize};

use crate::utils::json::display_as_json;

/// Sentiment polarity of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentType {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Sentiment of a piece of text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    /// Polarity label reported by the service.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub polarity: Option<SentimentType>,

    /// Sentiment strength (-1.0 to 1.0). Absent for neutral documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// `"1"` when the document mixes positive and negative sentiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed: Option<String>,
}

impl Sentiment {
    pub fn with_polarity(mut self, polarity: SentimentType) -> Self {
        self.polarity = Some(polarity);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Document-level sentiment analysis result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSentiment {
    /// The analyzed text, echoed back when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "docSentiment", skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    /// Detected language of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Alchemy call status, `OK` or `ERROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "statusInfo", skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,
}

impl DocumentSentiment {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// Taxonomy path of a concept in the knowledge graph, e.g.
/// `/companies/ibm`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(rename = "typeHierarchy", skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<String>,
}

impl KnowledgeGraph {
    pub fn with_type_hierarchy(mut self, type_hierarchy: impl Into<String>) -> Self {
        self.type_hierarchy = Some(type_hierarchy.into());
        self
    }
}

/// Concepts ranked by relevance for a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedConcepts {
    #[serde(default)]
    pub concepts: Vec<RankedConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "statusInfo", skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,
}

/// One concept tag with its relevance weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Relevance of the concept to the document (0.0 to 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,

    #[serde(rename = "knowledgeGraph", skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<KnowledgeGraph>,
}

impl RankedConcept {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = Some(relevance);
        self
    }

    pub fn with_knowledge_graph(mut self, knowledge_graph: KnowledgeGraph) -> Self {
        self.knowledge_graph = Some(knowledge_graph);
        self
    }
}

display_as_json!(
    Sentiment,
    DocumentSentiment,
    KnowledgeGraph,
    RankedConcepts,
    RankedConcept,
);
