use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Decoded hazard analysis. Every top-level field may be missing from the
/// response; missing and `null` sequences decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub detected_foods: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dangerous_combinations: Vec<DangerousCombination>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medical_concerns: Vec<MedicalConcern>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub religious_concerns: Vec<String>,
    #[serde(default)]
    pub recommendations: Option<Recommendations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerousCombination {
    pub foods: Vec<String>,
    pub reason: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalConcern {
    pub ingredient: String,
    pub concern: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default)]
    pub overall_safety: Option<OverallSafety>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_to_remove: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_to_add: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallSafety {
    Safe,
    Unsafe,
}

impl OverallSafety {
    pub fn as_str(&self) -> &str {
        match self {
            OverallSafety::Safe => "safe",
            OverallSafety::Unsafe => "unsafe",
        }
    }
}

impl fmt::Display for OverallSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.detected_foods.is_empty()
            && self.dangerous_combinations.is_empty()
            && self.medical_concerns.is_empty()
            && self.religious_concerns.is_empty()
            && self.recommendations.is_none()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
