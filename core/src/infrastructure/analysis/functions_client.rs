use reqwest::{Client, header};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::domain::{
    common::{AnalysisServiceConfig, entities::app_errors::CoreError},
    meal_analysis::{
        entities::AnalysisRequest,
        ports::AnalysisClient,
        schema::{MALFORMED_ANALYSIS_MESSAGE, extract_error_message},
    },
};

pub const TIMEOUT_MESSAGE: &str = "Analysis request timed out";
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send a request to the analysis service";

/// Calls the hosted `analyze-meal` edge function over HTTP.
#[derive(Debug, Clone)]
pub struct FunctionsAnalysisClient {
    url: Url,
    api_key: String,
    client: Client,
}

impl FunctionsAnalysisClient {
    pub fn new(config: AnalysisServiceConfig) -> Result<Self, CoreError> {
        let url = config.function_url()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InvalidConfig(format!("could not build HTTP client: {}", e))
            })?;

        tracing::info!(
            url = %url,
            timeout_secs = config.timeout.as_secs_f64(),
            "Initializing analysis service client"
        );

        Ok(Self {
            url,
            api_key: config.api_key,
            client,
        })
    }

    async fn call_function(&self, request: &AnalysisRequest) -> Result<Value, CoreError> {
        let mut builder = self.client.post(self.url.clone()).json(request);
        if !self.api_key.is_empty() {
            builder = builder
                .bearer_auth(&self.api_key)
                .header("apikey", &self.api_key);
        }

        let response = builder
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Analysis service request failed: {}", e);
                transport_error(&e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read analysis service response: {}", e);
            transport_error(&e)
        })?;

        if !status.is_success() {
            tracing::error!("Analysis service error: {} - {}", status, body);
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|body| {
                    extract_error_message(&body).or_else(|| {
                        body.get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                    })
                });
            return Err(CoreError::remote(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse analysis service response: {}", e);
            CoreError::MalformedResponse(MALFORMED_ANALYSIS_MESSAGE.to_string())
        })
    }
}

fn transport_error(error: &reqwest::Error) -> CoreError {
    if error.is_timeout() {
        CoreError::Remote(TIMEOUT_MESSAGE.to_string())
    } else {
        CoreError::Remote(SEND_FAILURE_MESSAGE.to_string())
    }
}

impl AnalysisClient for FunctionsAnalysisClient {
    #[instrument(skip(self, request), fields(url = %self.url, has_image = request.has_image()))]
    async fn analyze_meal(&self, request: AnalysisRequest) -> Result<Value, CoreError> {
        self.call_function(&request).await
    }
}
