use thiserror::Error;

/// Shown when the analysis service fails without saying why.
pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Failed to analyze meal. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please upload a meal photo or enter ingredients before analyzing")]
    Validation,

    #[error("{0}")]
    Encoding(String),

    #[error("{0}")]
    Remote(String),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("An analysis is already in progress")]
    AlreadySubmitting,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Builds a remote error, falling back to the generic message when the
    /// service gave none.
    pub fn remote(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.trim().is_empty() => CoreError::Remote(message),
            _ => CoreError::Remote(ANALYSIS_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// The single line surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
