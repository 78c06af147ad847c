use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_analysis::entities::AnalysisRequest,
};

/// Client for the remote `analyze-meal` function.
///
/// Returns the raw JSON body of a successful call; decoding it is left to the
/// caller so that shape problems surface as a distinct error.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisClient: Send + Sync {
    fn analyze_meal(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

/// Transient user-facing notifications (toasts, status lines).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);
}
