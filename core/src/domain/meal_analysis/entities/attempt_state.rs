use crate::domain::meal_analysis::entities::AnalysisResult;

/// Lifecycle of the current analysis attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttemptState {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl AttemptState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, AttemptState::Submitting)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AttemptState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AttemptState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AttemptState::Idle => "idle",
            AttemptState::Submitting => "submitting",
            AttemptState::Succeeded(_) => "succeeded",
            AttemptState::Failed(_) => "failed",
        }
    }
}
