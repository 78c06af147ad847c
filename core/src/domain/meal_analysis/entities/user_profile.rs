use serde::{Deserialize, Serialize};

/// Profile the analysis is tailored to. Owned by the caller and passed through
/// to the analysis service untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub medical_conditions: String,
    pub religion: String,
    pub work_environment: String,
}

impl UserProfile {
    pub fn new(
        medical_conditions: impl Into<String>,
        religion: impl Into<String>,
        work_environment: impl Into<String>,
    ) -> Self {
        Self {
            medical_conditions: medical_conditions.into(),
            religion: religion.into(),
            work_environment: work_environment.into(),
        }
    }
}
