use serde::{Deserialize, Serialize};

use crate::domain::meal_analysis::entities::UserProfile;

/// Body sent to the `analyze-meal` function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// `data:<mime>;base64,<payload>`, or null without an image.
    pub image_data: Option<String>,
    pub ingredients: Option<String>,
    pub user_profile: UserProfile,
}

impl AnalysisRequest {
    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}
