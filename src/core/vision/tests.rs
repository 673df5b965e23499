//! Unit tests for the Alchemy Vision module.

use super::*;
use crate::config::WatsonConfig;
use crate::errors::WatsonError;

fn service() -> AlchemyVision {
    AlchemyVision::new(&WatsonConfig::new("test-api-key")).unwrap()
}

#[test]
fn test_default_endpoint() {
    assert_eq!(service().endpoint(), DEFAULT_URL);
}

#[tokio::test]
async fn test_recognize_faces_rejects_missing_file() {
    let result = service().recognize_faces("no/such/image.jpg".as_ref()).await;
    assert!(matches!(result, Err(WatsonError::InvalidArgument(_))));
}

#[test]
fn test_age_roundtrip_and_equality() {
    let age = Age::default().with_age_range("35-44").with_score("0.446989");

    let json = serde_json::to_string(&age).unwrap();
    assert!(json.contains("\"ageRange\":\"35-44\""));
    let back: Age = serde_json::from_str(&json).unwrap();
    assert_eq!(age, back);

    let other = Age::default().with_age_range("18-24").with_score("0.446989");
    assert_ne!(age, other);
}

#[test]
fn test_image_faces_parse() {
    let json = r#"{
        "status": "OK",
        "imageFaces": [
            {
                "age": {"ageRange": "25-34", "score": "0.63"},
                "gender": {"gender": "FEMALE", "score": "0.98"},
                "height": "120",
                "width": "110",
                "positionX": "64",
                "positionY": "32"
            }
        ]
    }"#;

    let faces: ImageFaces = serde_json::from_str(json).unwrap();
    assert_eq!(faces.image_faces.len(), 1);

    let face = &faces.image_faces[0];
    assert_eq!(
        face.age.as_ref().unwrap().age_range.as_deref(),
        Some("25-34")
    );
    assert_eq!(
        face.gender.as_ref().unwrap().gender.as_deref(),
        Some("FEMALE")
    );
    assert_eq!(face.position_x.as_deref(), Some("64"));
}

#[test]
fn test_image_faces_empty_body_is_permissive() {
    let faces: ImageFaces = serde_json::from_str("{}").unwrap();
    assert!(faces.image_faces.is_empty());
    assert!(faces.status.is_none());
}

#[test]
fn test_age_display_is_pretty_json() {
    let age = Age::default().with_age_range("45-54");
    let text = age.to_string();
    assert!(text.contains("\"ageRange\": \"45-54\""));
    assert!(!text.contains("score"));
}
