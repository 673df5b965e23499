//! Alchemy Vision model types.

use serde::{Deserialize, Serialize};

use crate::utils::json::display_as_json;

/// Age estimate for a detected face.
///
/// Both fields are strings on the wire: the range is a label like
/// `"35-44"` and the score a decimal like `"0.446989"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Age {
    #[serde(rename = "ageRange", skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

impl Age {
    pub fn with_age_range(mut self, age_range: impl Into<String>) -> Self {
        self.age_range = Some(age_range.into());
        self
    }

    pub fn with_score(mut self, score: impl Into<String>) -> Self {
        self.score = Some(score.into());
        self
    }
}

/// Gender estimate for a detected face.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// One face detected in an image, with its bounding box and estimates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(rename = "positionX", skip_serializing_if = "Option::is_none")]
    pub position_x: Option<String>,

    #[serde(rename = "positionY", skip_serializing_if = "Option::is_none")]
    pub position_y: Option<String>,
}

impl ImageFace {
    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// Face-detection result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageFaces {
    #[serde(rename = "imageFaces", default)]
    pub image_faces: Vec<ImageFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "statusInfo", skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,
}

display_as_json!(Age, Gender, ImageFace, ImageFaces);
