use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const DEFAULT_FUNCTION_NAME: &str = "analyze-meal";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024; // 20MB

#[derive(Clone, Debug)]
pub struct FoodHarmonyConfig {
    pub analysis: AnalysisServiceConfig,
}

#[derive(Clone, Debug)]
pub struct AnalysisServiceConfig {
    pub base_url: String,
    pub api_key: String,
    pub function_name: String,
    pub timeout: Duration,
    /// Largest image, in bytes, the client will encode and send.
    pub max_image_size: usize,
}

impl AnalysisServiceConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_image_size(mut self, max_image_size: usize) -> Self {
        self.max_image_size = max_image_size;
        self
    }

    /// Full URL of the remote analysis function.
    pub fn function_url(&self) -> Result<Url, CoreError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(CoreError::InvalidConfig(
                "analysis service URL is empty".to_string(),
            ));
        }
        if self.function_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "analysis function name is empty".to_string(),
            ));
        }

        Url::parse(&format!("{}/functions/v1/{}", base, self.function_name))
            .map_err(|e| CoreError::InvalidConfig(format!("invalid analysis service URL: {}", e)))
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
