//! Unit tests for the Concept Insights module.

use super::*;
use crate::config::WatsonConfig;
use crate::errors::WatsonError;

fn service() -> ConceptInsights {
    ConceptInsights::new(&WatsonConfig::new("test-api-key")).unwrap()
}

#[test]
fn test_default_endpoint() {
    assert_eq!(service().endpoint(), DEFAULT_URL);
}

#[tokio::test]
async fn test_annotate_text_rejects_empty_arguments() {
    let service = service();

    let result = service.annotate_text("", "wikipedia", "IBM").await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));

    let result = service.annotate_text("public", "", "IBM").await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));

    let result = service.annotate_text("public", "wikipedia", "  ").await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));
}

#[test]
fn test_scored_concept_roundtrip() {
    let scored = ScoredConcept::default()
        .with_concept(
            Concept::default()
                .with_id("/graphs/wikipedia/en-20120601/concepts/IBM")
                .with_label("IBM"),
        )
        .with_score(0.92);

    let json = serde_json::to_string(&scored).unwrap();
    let back: ScoredConcept = serde_json::from_str(&json).unwrap();
    assert_eq!(scored, back);
}

#[test]
fn test_scored_concept_equality_breaks_on_score_change() {
    let concept = Concept::default().with_name("IBM");
    let a = ScoredConcept::default()
        .with_concept(concept.clone())
        .with_score(0.5);
    let b = ScoredConcept::default()
        .with_concept(concept.clone())
        .with_score(0.5);
    assert_eq!(a, b);

    let c = ScoredConcept::default().with_concept(concept).with_score(0.6);
    assert_ne!(a, c);
}

#[test]
fn test_concept_abstract_wire_name() {
    let json = r#"{
        "id": "/graphs/wikipedia/en-20120601/concepts/IBM",
        "label": "IBM",
        "abstract": "International Business Machines Corporation",
        "link": "http://en.wikipedia.org/wiki/IBM"
    }"#;

    let concept: Concept = serde_json::from_str(json).unwrap();
    assert_eq!(
        concept.abstract_text.as_deref(),
        Some("International Business Machines Corporation")
    );

    let rendered = serde_json::to_string(&concept).unwrap();
    assert!(rendered.contains("\"abstract\":"));
    assert!(!rendered.contains("abstract_text"));
}

#[test]
fn test_annotations_parse() {
    let json = r#"{
        "annotations": [
            {
                "concept": {"id": "/graphs/wikipedia/en-20120601/concepts/IBM", "label": "IBM"},
                "score": 0.974
            },
            {
                "concept": {"label": "Watson"},
                "score": 0.871
            }
        ]
    }"#;

    let annotations: Annotations = serde_json::from_str(json).unwrap();
    assert_eq!(annotations.annotations.len(), 2);
    assert_eq!(
        annotations.annotations[0]
            .concept
            .as_ref()
            .unwrap()
            .label
            .as_deref(),
        Some("IBM")
    );
    assert_eq!(annotations.annotations[1].score, Some(0.871));
}

#[test]
fn test_annotations_display_is_pretty_json() {
    let annotations = Annotations {
        annotations: vec![
            ScoredConcept::default()
                .with_concept(Concept::default().with_label("IBM"))
                .with_score(0.9),
        ],
    };
    let text = annotations.to_string();
    assert!(text.contains("\"label\": \"IBM\""));
}
