use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_analysis::entities::AnalysisResult,
};

pub const NO_ANALYSIS_DATA_MESSAGE: &str = "No analysis data received";
pub const MALFORMED_ANALYSIS_MESSAGE: &str = "Received malformed analysis data";

/// Pulls the service's own error text out of a response body.
///
/// Only a non-empty `{"error": "..."}` or `{"error": {"message": "..."}}`
/// counts. Empty strings, `0`, `false`, `null` and empty containers mean
/// there is no error.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let message = match body.get("error")? {
        Value::String(message) => message.as_str(),
        Value::Object(fields) => fields.get("message").and_then(Value::as_str)?,
        _ => return None,
    };

    (!message.trim().is_empty()).then(|| message.to_string())
}

/// Validates a successful response body and decodes its `analysis` field.
pub fn decode_analysis_response(body: &Value) -> Result<AnalysisResult, CoreError> {
    if let Some(message) = extract_error_message(body) {
        tracing::warn!("Analysis service reported an error: {}", message);
        return Err(CoreError::remote(Some(message)));
    }

    let analysis = body
        .get("analysis")
        .filter(|analysis| !analysis.is_null())
        .ok_or_else(|| CoreError::MalformedResponse(NO_ANALYSIS_DATA_MESSAGE.to_string()))?;

    AnalysisResult::deserialize_checked(analysis)
}

impl AnalysisResult {
    fn deserialize_checked(analysis: &Value) -> Result<Self, CoreError> {
        if !analysis.is_object() {
            tracing::error!("Analysis field is not an object: {}", analysis);
            return Err(CoreError::MalformedResponse(
                MALFORMED_ANALYSIS_MESSAGE.to_string(),
            ));
        }

        serde_json::from_value(analysis.clone()).map_err(|e| {
            tracing::error!("Invalid analysis format: {}", e);
            CoreError::MalformedResponse(MALFORMED_ANALYSIS_MESSAGE.to_string())
        })
    }
}
