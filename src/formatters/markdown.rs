use crate::assessment::{AssessmentResult, MeasurementKind};
use crate::formatters::tone::StatusTone;

/// Markdown formatter for assessment results
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format result as markdown
    pub fn format(result: &AssessmentResult) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Assessment Results\n\n");
        md.push_str("*Based on WHO growth standards (simplified reference values)*\n\n");

        // Z-scores
        md.push_str("## Z-scores\n\n");
        md.push_str("| Indicator | Z-score |\n");
        md.push_str("|-----------|---------|\n");
        for (kind, value) in [
            (MeasurementKind::WeightForHeight, result.wfh_z),
            (MeasurementKind::HeightForAge, result.hfa_z),
            (MeasurementKind::WeightForAge, result.wfa_z),
            (MeasurementKind::BmiForAge, result.bmi_z),
        ] {
            md.push_str(&format!(
                "| {} ({}) | {} |\n",
                kind.display_text(),
                kind.code(),
                Self::format_z(value)
            ));
        }
        md.push('\n');

        // Interpretation
        let status = result.nutritional_status.display_text();
        md.push_str("## Interpretation\n\n");
        md.push_str(&format!("{} **{}**\n\n", StatusTone::for_status(status).icon(), status));

        md.push_str("## Detailed Status\n\n");
        for detail in &result.detailed_status {
            md.push_str(&format!("- {} {}\n", StatusTone::for_status(detail).icon(), detail));
        }
        md.push('\n');

        md.push_str("## Recommendations\n\n");
        for recommendation in &result.recommendations {
            md.push_str(&format!("- {}\n", recommendation));
        }

        md
    }

    fn format_z(value: f64) -> String {
        if value.is_finite() {
            format!("{:.2}", value)
        } else {
            "n/a".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AgeUnit, ChildMeasurement, Sex, assess_nutritional_status};

    #[test]
    fn test_format_markdown() {
        let m = ChildMeasurement::new(24.0, AgeUnit::Months, Sex::Male, 10.0, 80.0);
        let result = assess_nutritional_status(&m).unwrap();
        let md = MarkdownFormatter::format(&result);

        assert!(md.starts_with("# Assessment Results"));
        assert!(md.contains("| Weight for Height (WHZ) | -2.25 |"));
        assert!(md.contains("| Weight for Age (WAZ) | -2.43 |"));
        assert!(md.contains("🟠 **Moderate Acute Malnutrition**"));
        assert!(md.contains("- 🔵 Underweight"));
        assert!(md.contains("- Energy-dense foods rich in nutrients are recommended."));
    }

    #[test]
    fn test_non_finite_rendered_as_na() {
        assert_eq!(MarkdownFormatter::format_z(f64::NAN), "n/a");
        assert_eq!(MarkdownFormatter::format_z(-0.126), "-0.13");
    }
}
