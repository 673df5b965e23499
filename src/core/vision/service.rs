//! Alchemy Vision service facade.

use std::path::Path;

use bytes::Bytes;
use reqwest::Method;
use tracing::debug;

use super::models::ImageFaces;
use crate::config::WatsonConfig;
use crate::core::base::ServiceClient;
use crate::core::language::check_alchemy_status;
use crate::errors::{WatsonError, WatsonResult};

/// Default Alchemy gateway endpoint.
pub const DEFAULT_URL: &str = "https://gateway-a.watsonplatform.net/calls";

const PATH_FACE_TAGS: &str = "/image/ImageGetRankedImageFaceTags";

/// Client for the Alchemy Vision image-analysis service.
pub struct AlchemyVision {
    client: ServiceClient,
}

impl AlchemyVision {
    /// Create the facade. Fails on an empty API key.
    pub fn new(config: &WatsonConfig) -> WatsonResult<Self> {
        Ok(Self {
            client: ServiceClient::new(config, DEFAULT_URL)?,
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Detect faces in an image, estimating age and gender for each.
    ///
    /// The image file must exist; its raw bytes are uploaded as the request
    /// body (`imagePostMode=raw`).
    pub async fn recognize_faces(&self, image: &Path) -> WatsonResult<ImageFaces> {
        let metadata = tokio::fs::metadata(image).await.map_err(|_| {
            WatsonError::InvalidArgument(format!(
                "image file {} does not exist",
                image.display()
            ))
        })?;
        if !metadata.is_file() {
            return Err(WatsonError::InvalidArgument(format!(
                "{} is not a file",
                image.display()
            )));
        }

        let params = vec![
            ("imagePostMode".to_string(), "raw".to_string()),
            ("outputMode".to_string(), "json".to_string()),
        ];
        let url = self.client.url(PATH_FACE_TAGS, &params)?;

        let body = tokio::fs::read(image)
            .await
            .map_err(|e| WatsonError::Internal(format!("failed to read image file: {e}")))?;
        debug!(bytes = body.len(), "Uploading image for face detection");

        let request = self
            .client
            .request(Method::POST, url)
            .await?
            .body(Bytes::from(body));
        let response = self.client.send(request).await?;
        let faces: ImageFaces = ServiceClient::read_json(response).await?;

        check_alchemy_status(faces.status.as_deref(), faces.status_info.as_deref())?;
        Ok(faces)
    }
}
