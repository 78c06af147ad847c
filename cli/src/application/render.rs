use std::fmt;

use foodharmony_core::domain::meal_analysis::render::{AnalysisView, ResultSection};

/// Renders an analysis as plain text, one block per section.
pub fn render_text(view: &AnalysisView) -> String {
    TextReport(view).to_string()
}

struct TextReport<'a>(&'a AnalysisView);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No hazards or recommendations were returned for this meal.");
        }

        for (index, section) in self.0.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {} ==", section.title())?;
            write_section(f, section)?;
        }

        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &ResultSection) -> fmt::Result {
    match section {
        ResultSection::DetectedFoods(foods) => writeln!(f, "{}", foods.join(", "))?,
        ResultSection::DangerousCombinations(combinations) => {
            for combination in combinations {
                let marker = if combination.emphasized { "!!" } else { "!" };
                writeln!(
                    f,
                    "{} {} [{}]",
                    marker,
                    combination.label,
                    combination.badge()
                )?;
                writeln!(f, "   {}", combination.reason)?;
            }
        }
        ResultSection::MedicalConcerns(concerns) => {
            for concern in concerns {
                writeln!(f, "* {}", concern.ingredient)?;
                writeln!(f, "  {}", concern.concern)?;
                writeln!(f, "  Recommendation: {}", concern.recommendation)?;
            }
        }
        ResultSection::ReligiousConcerns(concerns) => {
            for concern in concerns {
                writeln!(f, "* {}", concern)?;
            }
        }
        ResultSection::Recommendations(recommendations) => {
            if let Some(badge) = recommendations.safety_badge() {
                writeln!(f, "{}", badge)?;
            }
            if !recommendations.items_to_remove.is_empty() {
                writeln!(f, "Items to Remove:")?;
                for item in &recommendations.items_to_remove {
                    writeln!(f, "  - {}", item)?;
                }
            }
            if !recommendations.items_to_add.is_empty() {
                writeln!(f, "Items to Add:")?;
                for item in &recommendations.items_to_add {
                    writeln!(f, "  + {}", item)?;
                }
            }
            if let Some(notes) = &recommendations.notes {
                writeln!(f, "Notes: {}", notes)?;
            }
        }
    }

    Ok(())
}
