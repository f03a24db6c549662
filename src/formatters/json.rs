use crate::assessment::AssessmentResult;

/// JSON formatter for assessment results
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format result as pretty-printed JSON
    pub fn format(result: &AssessmentResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Format result as compact JSON (no whitespace)
    pub fn format_compact(result: &AssessmentResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AgeUnit, ChildMeasurement, Sex, assess_nutritional_status};

    #[test]
    fn test_format_json_uses_form_field_names() {
        let m = ChildMeasurement::new(24.0, AgeUnit::Months, Sex::Male, 10.0, 80.0);
        let result = assess_nutritional_status(&m).unwrap();

        let json = JsonFormatter::format(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["wfhZScore"].is_number());
        assert!(value["bmiZScore"].is_number());
        assert_eq!(value["nutritionalStatus"], "Moderate Acute Malnutrition");
        assert_eq!(value["detailedStatus"][1], "Underweight");
        assert!(value.get("conditions").is_none());
    }

    #[test]
    fn test_format_compact() {
        let m = ChildMeasurement::new(200.0, AgeUnit::Months, Sex::Male, 45.0, 160.0);
        let result = assess_nutritional_status(&m).unwrap();
        let json = JsonFormatter::format_compact(&result).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"nutritionalStatus\":\"Normal\""));
    }
}
