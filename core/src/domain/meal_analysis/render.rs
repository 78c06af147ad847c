use crate::domain::meal_analysis::entities::{
    AnalysisResult, DangerousCombination, MedicalConcern, OverallSafety, Recommendations,
    Severity,
};

/// What a renderer should display for an analysis, section by section.
///
/// Sections whose content is absent or empty are left out entirely. Entries
/// keep the order the service returned them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub sections: Vec<ResultSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSection {
    DetectedFoods(Vec<String>),
    DangerousCombinations(Vec<CombinationView>),
    MedicalConcerns(Vec<MedicalConcern>),
    ReligiousConcerns(Vec<String>),
    Recommendations(RecommendationsView),
}

impl ResultSection {
    pub fn title(&self) -> &'static str {
        match self {
            ResultSection::DetectedFoods(_) => "Detected Foods",
            ResultSection::DangerousCombinations(_) => "Dangerous Food Combinations",
            ResultSection::MedicalConcerns(_) => "Medical Concerns",
            ResultSection::ReligiousConcerns(_) => "Religious Considerations",
            ResultSection::Recommendations(_) => "Recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationView {
    /// Foods joined with " + ".
    pub label: String,
    pub reason: String,
    pub severity: Severity,
    pub emphasized: bool,
}

impl CombinationView {
    pub fn badge(&self) -> String {
        format!("{} severity", self.severity)
    }
}

impl From<&DangerousCombination> for CombinationView {
    fn from(combination: &DangerousCombination) -> Self {
        Self {
            label: combination.foods.join(" + "),
            reason: combination.reason.clone(),
            severity: combination.severity,
            emphasized: combination.severity == Severity::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationsView {
    pub overall_safety: Option<OverallSafety>,
    pub items_to_remove: Vec<String>,
    pub items_to_add: Vec<String>,
    pub notes: Option<String>,
}

impl RecommendationsView {
    pub fn safety_badge(&self) -> Option<String> {
        self.overall_safety
            .map(|safety| format!("Overall Safety: {}", safety))
    }
}

impl From<&Recommendations> for RecommendationsView {
    fn from(recommendations: &Recommendations) -> Self {
        Self {
            overall_safety: recommendations.overall_safety,
            items_to_remove: recommendations.items_to_remove.clone(),
            items_to_add: recommendations.items_to_add.clone(),
            notes: recommendations
                .notes
                .clone()
                .filter(|notes| !notes.is_empty()),
        }
    }
}

impl From<&AnalysisResult> for AnalysisView {
    fn from(result: &AnalysisResult) -> Self {
        let mut sections = Vec::new();

        if !result.detected_foods.is_empty() {
            sections.push(ResultSection::DetectedFoods(result.detected_foods.clone()));
        }

        if !result.dangerous_combinations.is_empty() {
            sections.push(ResultSection::DangerousCombinations(
                result
                    .dangerous_combinations
                    .iter()
                    .map(CombinationView::from)
                    .collect(),
            ));
        }

        if !result.medical_concerns.is_empty() {
            sections.push(ResultSection::MedicalConcerns(
                result.medical_concerns.clone(),
            ));
        }

        if !result.religious_concerns.is_empty() {
            sections.push(ResultSection::ReligiousConcerns(
                result.religious_concerns.clone(),
            ));
        }

        // Shown whenever the service sent the object, even with nothing in it.
        if let Some(recommendations) = &result.recommendations {
            sections.push(ResultSection::Recommendations(recommendations.into()));
        }

        Self { sections }
    }
}

impl AnalysisView {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
