//! Unit tests for the Alchemy Language module.

use super::*;
use crate::config::WatsonConfig;
use crate::errors::WatsonError;

fn service() -> AlchemyLanguage {
    AlchemyLanguage::new(&WatsonConfig::new("test-api-key")).unwrap()
}

#[test]
fn test_default_endpoint() {
    assert_eq!(service().endpoint(), DEFAULT_URL);
}

#[tokio::test]
async fn test_sentiment_rejects_empty_text() {
    let result = service().sentiment("   ").await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_ranked_concepts_rejects_empty_text() {
    let result = service().ranked_concepts("").await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));
}

#[test]
fn test_alchemy_error_status_is_folded_into_service_error() {
    let result = check_alchemy_status(Some("ERROR"), Some("invalid-api-key"));
    match result {
        Err(WatsonError::Service { body, .. }) => assert_eq!(body, "invalid-api-key"),
        other => panic!("expected Service error, got {other:?}"),
    }

    assert!(check_alchemy_status(Some("OK"), None).is_ok());
    assert!(check_alchemy_status(None, None).is_ok());
}

#[test]
fn test_document_sentiment_parses_doc_sentiment_key() {
    let json = r#"{
        "status": "OK",
        "language": "english",
        "docSentiment": {"type": "positive", "score": 0.61, "mixed": "1"}
    }"#;

    let doc: DocumentSentiment = serde_json::from_str(json).unwrap();
    let sentiment = doc.sentiment.unwrap();
    assert_eq!(sentiment.polarity, Some(SentimentType::Positive));
    assert_eq!(sentiment.score, Some(0.61));
    assert_eq!(sentiment.mixed.as_deref(), Some("1"));
    assert_eq!(doc.language.as_deref(), Some("english"));
}

#[test]
fn test_sentiment_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&SentimentType::Negative).unwrap(),
        "\"negative\""
    );
    let parsed: SentimentType = serde_json::from_str("\"neutral\"").unwrap();
    assert_eq!(parsed, SentimentType::Neutral);
}

#[test]
fn test_document_sentiment_roundtrip() {
    let doc = DocumentSentiment::default()
        .with_text("I love this product")
        .with_sentiment(
            Sentiment::default()
                .with_polarity(SentimentType::Positive)
                .with_score(0.8),
        );

    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("\"docSentiment\""));
    let back: DocumentSentiment = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn test_document_sentiment_equality_breaks_on_field_change() {
    let a = DocumentSentiment::default().with_text("same");
    let b = DocumentSentiment::default().with_text("same");
    assert_eq!(a, b);

    let c = DocumentSentiment::default().with_text("different");
    assert_ne!(a, c);
}

#[test]
fn test_knowledge_graph_roundtrip() {
    let graph = KnowledgeGraph::default().with_type_hierarchy("/companies/ibm");

    let json = serde_json::to_string(&graph).unwrap();
    assert!(json.contains("\"typeHierarchy\""));
    let back: KnowledgeGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(graph, back);
}

#[test]
fn test_ranked_concepts_parse() {
    let json = r#"{
        "status": "OK",
        "concepts": [
            {
                "text": "IBM",
                "relevance": 0.92,
                "knowledgeGraph": {"typeHierarchy": "/companies/ibm"}
            },
            {"text": "cloud computing", "relevance": 0.55}
        ]
    }"#;

    let concepts: RankedConcepts = serde_json::from_str(json).unwrap();
    assert_eq!(concepts.concepts.len(), 2);
    assert_eq!(
        concepts.concepts[0]
            .knowledge_graph
            .as_ref()
            .unwrap()
            .type_hierarchy
            .as_deref(),
        Some("/companies/ibm")
    );
    assert!(concepts.concepts[1].knowledge_graph.is_none());
}

#[test]
fn test_display_is_pretty_json() {
    let graph = KnowledgeGraph::default().with_type_hierarchy("/people");
    let text = graph.to_string();
    assert!(text.contains("\"typeHierarchy\": \"/people\""));
}
