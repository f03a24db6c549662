//! Assessment Integration Tests
//!
//! End-to-end checks through the public API: measurement in, classified result out.

use approx::assert_relative_eq;
use child_nutrition_rust::assessment::{
    calculate_bmi, calculate_z_score, classify, normalize_age_to_months, reference_point,
    MeasurementKind, RuleInput,
};
use child_nutrition_rust::{
    assess_nutritional_status, nutrition_recommendations, AgeUnit, AssessmentConfig, AssessmentError,
    Assessor, ChildMeasurement, Condition, Cutoffs, DegenerateInputPolicy, NutritionalStatus, Sex,
    ZScores,
};

/// With the linear references, this measurement lands every index in the normal range.
fn normal_child() -> ChildMeasurement {
    ChildMeasurement::new(200.0, AgeUnit::Months, Sex::Male, 45.0, 160.0)
}

fn rule_input(wfh: f64, hfa: f64, wfa: f64, bmi: f64) -> RuleInput {
    RuleInput {
        z: ZScores { wfh, hfa, wfa, bmi },
        muac_cm: None,
        has_edema: false,
    }
}

#[test]
fn test_arithmetic_helpers() {
    assert_relative_eq!(normalize_age_to_months(1.0, AgeUnit::Years), 12.0);
    assert_relative_eq!(normalize_age_to_months(6.0, AgeUnit::Months), 6.0);
    assert_relative_eq!(calculate_bmi(10.0, 100.0), 10.0, epsilon = 1e-12);
    assert_relative_eq!(calculate_z_score(10.0, 10.0, 2.0), 0.0);
    assert_relative_eq!(calculate_z_score(8.0, 10.0, 2.0), -1.0);
}

#[test]
fn test_reference_resolver_is_deterministic() {
    for kind in MeasurementKind::ALL {
        assert_eq!(
            reference_point(13.0, Sex::Female, kind),
            reference_point(13.0, Sex::Female, kind)
        );
    }
}

#[test]
fn test_end_to_end_24_month_boy() {
    let m = ChildMeasurement::new(24.0, AgeUnit::Months, Sex::Male, 10.0, 80.0);

    let weight_ref = reference_point(24.0, Sex::Male, MeasurementKind::WeightForAge);
    assert_relative_eq!(weight_ref.median, 11.8, epsilon = 1e-9);
    assert_relative_eq!(weight_ref.standard_deviation, 0.74, epsilon = 1e-9);

    let result = assess_nutritional_status(&m).unwrap();
    assert_relative_eq!(result.wfa_z, -2.4324, epsilon = 1e-4);
    assert!(result.detailed_status.iter().any(|s| s == "Underweight"));
    // WHZ = (0.125 - 0.17) / 0.02 = -2.25 → moderate wasting as well
    assert_eq!(result.nutritional_status, NutritionalStatus::ModerateAcuteMalnutrition);
    assert_eq!(
        result.detailed_status,
        vec!["Moderate Acute Malnutrition (MAM)", "Underweight"]
    );
}

#[test]
fn test_severe_wasting_yields_single_sam_entry() {
    // Regardless of the other indices
    for (hfa, wfa, bmi) in [(0.0, 0.0, 0.0), (-3.5, -3.0, 0.0), (1.0, 1.0, 2.5)] {
        let c = classify(&rule_input(-3.5, hfa, wfa, bmi), &Cutoffs::default());
        assert_eq!(c.status, NutritionalStatus::SevereAcuteMalnutrition);
        let sam = c
            .conditions
            .iter()
            .filter(|c| c.label().contains("SAM"))
            .count();
        assert_eq!(sam, 1);
        assert!(!c.conditions.contains(&Condition::ModerateAcuteMalnutrition));
    }
}

#[test]
fn test_edema_overrides_normal_indices() {
    let result = assess_nutritional_status(&normal_child().with_edema(true)).unwrap();
    assert_eq!(result.nutritional_status, NutritionalStatus::SevereAcuteMalnutrition);
    assert_eq!(result.detailed_status, vec!["Severe Acute Malnutrition (SAM)"]);
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn test_muac_boundary() {
    let at_cutoff = assess_nutritional_status(&normal_child().with_muac(11.5)).unwrap();
    assert_eq!(at_cutoff.nutritional_status, NutritionalStatus::ModerateAcuteMalnutrition);
    assert!(!at_cutoff.has_condition(Condition::SevereAcuteMalnutrition));

    let below = assess_nutritional_status(&normal_child().with_muac(11.49)).unwrap();
    assert_eq!(below.nutritional_status, NutritionalStatus::SevereAcuteMalnutrition);
}

#[test]
fn test_independent_conditions_co_occur_in_order() {
    let c = classify(&rule_input(-1.0, -2.5, -2.1, 0.0), &Cutoffs::default());
    assert_eq!(c.status, NutritionalStatus::Normal);
    let labels: Vec<_> = c.conditions.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Stunted (Chronic Malnutrition)", "Underweight"]);
}

#[test]
fn test_normal_fallback() {
    let c = classify(&rule_input(1.9, -1.9, 0.0, -1.9), &Cutoffs::default());
    assert_eq!(c.status, NutritionalStatus::Normal);
    assert_eq!(c.conditions, vec![Condition::Normal]);

    let result = assess_nutritional_status(&normal_child()).unwrap();
    assert_eq!(result.nutritional_status, NutritionalStatus::Normal);
    assert_eq!(result.detailed_status, vec!["Normal nutritional status"]);
    assert_eq!(
        result.recommendations,
        vec![
            "Continue with age-appropriate balanced diet.",
            "Regular growth monitoring is recommended.",
        ]
    );
}

#[test]
fn test_acute_status_survives_overweight_rule() {
    // Rule 5 runs last but only claims the primary status while it is still Normal.
    let result = assess_nutritional_status(
        &ChildMeasurement { height_cm: 136.0, ..normal_child() }.with_muac(12.0),
    )
    .unwrap();
    assert_eq!(result.nutritional_status, NutritionalStatus::ModerateAcuteMalnutrition);
    assert_eq!(
        result.detailed_status,
        vec![
            "Moderate Acute Malnutrition (MAM)",
            "Stunted (Chronic Malnutrition)",
            "Overweight/Obese",
        ]
    );
    assert_eq!(
        result.recommendations,
        vec![
            "Supplementary feeding program is recommended.",
            "Regular monitoring of growth is essential.",
            "Focus on long-term nutritional support and micronutrient supplementation.",
            "Balanced diet with portion control is recommended.",
            "Regular physical activity appropriate for age.",
        ]
    );
}

#[test]
fn test_other_sex_matches_male() {
    let male = assess_nutritional_status(&ChildMeasurement::new(18.0, AgeUnit::Months, Sex::Male, 9.5, 78.0)).unwrap();
    let other = assess_nutritional_status(&ChildMeasurement::new(18.0, AgeUnit::Months, Sex::Other, 9.5, 78.0)).unwrap();
    let female = assess_nutritional_status(&ChildMeasurement::new(18.0, AgeUnit::Months, Sex::Female, 9.5, 78.0)).unwrap();
    assert_eq!(male, other);
    assert_ne!(male.wfa_z, female.wfa_z);
}

#[test]
fn test_degenerate_height_policies() {
    let m = ChildMeasurement::new(12.0, AgeUnit::Months, Sex::Female, 8.0, 0.0);

    match assess_nutritional_status(&m) {
        Err(AssessmentError::InvalidMeasurement { field, value, .. }) => {
            assert_eq!(field, "heightCm");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    let propagate = Assessor::with_config(AssessmentConfig {
        degenerate_input: DegenerateInputPolicy::Propagate,
        ..AssessmentConfig::default()
    })
    .unwrap();
    let result = propagate.assess(&m).unwrap();
    assert!(result.has_non_finite_scores());
    assert!(!result.detailed_status.is_empty());
}

#[test]
fn test_json_round_trip_from_form_payload() {
    let payload = r#"{"age": 2, "ageUnit": "years", "gender": "male", "weight": 10, "height": 80}"#;
    let m: ChildMeasurement = serde_json::from_str(payload).unwrap();
    let result = assess_nutritional_status(&m).unwrap();
    assert!(result.has_condition(Condition::Underweight));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["nutritionalStatus"], "Moderate Acute Malnutrition");
    assert_eq!(json["recommendations"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_feeding_guidance_bands() {
    assert_eq!(nutrition_recommendations(2.0, None).len(), 3);
    assert_eq!(nutrition_recommendations(9.0, None)[0], "Continue breastfeeding on demand");
    assert_eq!(
        nutrition_recommendations(15.0, Some(NutritionalStatus::Normal))[0],
        "Continue breastfeeding up to 2 years or beyond"
    );
    assert_eq!(
        nutrition_recommendations(36.0, None)[0],
        "Provide a balanced diet with foods from all food groups"
    );
}
