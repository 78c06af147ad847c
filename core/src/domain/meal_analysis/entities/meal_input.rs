use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::OnceCell;

/// Where the selected meal photo lives. Files are only read when the image is
/// encoded, so a replaced or removed selection never costs a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Memory(Bytes),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealImage {
    pub source: ImageSource,
    /// MIME type declared by whoever picked the file, if any.
    pub mime_type: Option<String>,
}

impl MealImage {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ImageSource::File(path.into()),
            mime_type: None,
        }
    }

    pub fn from_bytes(data: impl Into<Bytes>, mime_type: Option<String>) -> Self {
        Self {
            source: ImageSource::Memory(data.into()),
            mime_type,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::File(path) => Some(path),
            ImageSource::Memory(_) => None,
        }
    }
}

/// What the user has entered for the current attempt.
#[derive(Debug, Clone, Default)]
pub struct MealInput {
    image: Option<MealImage>,
    ingredients_text: Option<String>,
    pub(crate) preview: Arc<OnceCell<String>>,
}

impl MealInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the candidate image. Any preview derived from a previous
    /// selection is dropped.
    pub fn set_image(&mut self, image: MealImage) {
        self.image = Some(image);
        self.preview = Arc::new(OnceCell::new());
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.preview = Arc::new(OnceCell::new());
    }

    /// Stored verbatim; interpretation is left to the analysis service.
    pub fn set_ingredients_text(&mut self, text: impl Into<String>) {
        self.ingredients_text = Some(text.into());
    }

    pub fn image(&self) -> Option<&MealImage> {
        self.image.as_ref()
    }

    pub fn ingredients_text(&self) -> Option<&str> {
        self.ingredients_text.as_deref()
    }

    /// Ingredient text as sent on the wire: `None` when absent or empty.
    pub fn ingredients(&self) -> Option<&str> {
        self.ingredients_text().filter(|text| !text.is_empty())
    }

    /// True once an image is held or non-empty ingredient text was entered.
    pub fn is_ready(&self) -> bool {
        self.image.is_some() || self.ingredients().is_some()
    }
}
