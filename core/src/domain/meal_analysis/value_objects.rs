use crate::domain::meal_analysis::entities::{AttemptState, MealInput};

pub const ANALYZE_LABEL: &str = "Analyze Meal";
pub const ANALYZING_LABEL: &str = "Analyzing...";

pub const SUCCESS_TITLE: &str = "Analysis Complete";
pub const SUCCESS_MESSAGE: &str = "Your meal has been analyzed successfully";
pub const FAILURE_TITLE: &str = "Analysis Failed";

/// State of the "analyze" trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn for_input(input: &MealInput, state: &AttemptState) -> Self {
        let submitting = state.is_submitting();

        Self {
            enabled: !submitting && input.is_ready(),
            label: if submitting {
                ANALYZING_LABEL
            } else {
                ANALYZE_LABEL
            },
        }
    }
}
