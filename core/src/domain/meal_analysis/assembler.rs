use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{DEFAULT_MAX_IMAGE_SIZE, entities::app_errors::CoreError},
    meal_analysis::entities::{AnalysisRequest, ImageSource, MealImage, MealInput, UserProfile},
};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

impl MealImage {
    /// Loads the raw image bytes, refusing anything over `max_size`.
    pub async fn read(&self, max_size: usize) -> Result<Bytes, CoreError> {
        let data = match &self.source {
            ImageSource::Memory(data) => data.clone(),
            ImageSource::File(path) => tokio::fs::read(path).await.map(Bytes::from).map_err(|e| {
                tracing::error!("Failed to read image {}: {}", path.display(), e);
                CoreError::Encoding(format!(
                    "Could not read image file {}: {}",
                    path.display(),
                    e
                ))
            })?,
        };

        if data.is_empty() {
            return Err(CoreError::Encoding("The selected image is empty".to_string()));
        }

        if data.len() > max_size {
            return Err(CoreError::Encoding(format!(
                "Image too large. Max size is {} bytes",
                max_size
            )));
        }

        Ok(data)
    }

    /// Declared type first, then the file signature, then the extension.
    pub fn resolve_mime_type(&self, data: &[u8]) -> String {
        self.mime_type
            .as_deref()
            .filter(|mime| !mime.trim().is_empty())
            .or_else(|| sniff_mime_type(data))
            .or_else(|| self.path().and_then(mime_from_extension))
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string()
    }

    pub async fn to_data_uri(&self, max_size: usize) -> Result<String, CoreError> {
        let data = self.read(max_size).await?;
        let mime_type = self.resolve_mime_type(&data);
        Ok(encode_data_uri(&mime_type, &data))
    }
}

impl MealInput {
    /// Data URI of the selected image for display.
    ///
    /// Derived on demand, not by `set_image`, and cached until the selection
    /// changes. Submission never waits on it.
    pub async fn preview(&self) -> Result<Option<&str>, CoreError> {
        let Some(image) = self.image() else {
            return Ok(None);
        };

        let preview = self
            .preview
            .get_or_try_init(|| image.to_data_uri(DEFAULT_MAX_IMAGE_SIZE))
            .await?;

        Ok(Some(preview.as_str()))
    }

    /// Turns the current input into the wire payload. The image, if any, is
    /// encoded here and nowhere earlier.
    #[instrument(skip(self, profile), fields(has_image = self.image().is_some()))]
    pub async fn build_request(
        &self,
        profile: &UserProfile,
        max_image_size: usize,
    ) -> Result<AnalysisRequest, CoreError> {
        if !self.is_ready() {
            return Err(CoreError::Validation);
        }

        let image_data = match self.image() {
            Some(image) => Some(image.to_data_uri(max_image_size).await?),
            None => None,
        };

        Ok(AnalysisRequest {
            image_data,
            ingredients: self.ingredients().map(str::to_string),
            user_profile: profile.clone(),
        })
    }
}

pub fn encode_data_uri(mime_type: &str, data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(data)
    )
}

pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
