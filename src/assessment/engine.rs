//! Assessment Engine
//!
//! Measurement → age in months → BMI → four reference points → four Z-scores
//! → classification. Pure: no state survives between calls, so one `Assessor`
//! can be shared across threads freely.

use super::anthropometry::{calculate_bmi, calculate_z_score, normalize_age_to_months, weight_per_height_cm};
use super::classify::classify_measurement;
use super::reference::{reference_point, MeasurementKind};
use super::types::{AssessmentResult, ChildMeasurement, ZScores};
use crate::config::{AssessmentConfig, DegenerateInputPolicy};
use crate::error::{AssessmentError, AssessmentOutcome};

/// Nutritional status assessor carrying its cutoff configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Assessor {
    config: AssessmentConfig,
}

impl Assessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assessor, rejecting inconsistent cutoffs up front
    pub fn with_config(config: AssessmentConfig) -> AssessmentOutcome<Self> {
        config.cutoffs.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Assess one child.
    ///
    /// Under `DegenerateInputPolicy::Reject` invalid measurements fail with
    /// `AssessmentError::InvalidMeasurement`; under `Propagate` this never fails.
    pub fn assess(&self, measurement: &ChildMeasurement) -> AssessmentOutcome<AssessmentResult> {
        if self.config.degenerate_input == DegenerateInputPolicy::Reject {
            if let Err(err) = validate_measurement(measurement) {
                tracing::warn!("Rejected measurement: {}", err);
                return Err(err);
            }
        }

        let z = compute_z_scores(measurement);
        tracing::debug!(
            "Z-scores: WHZ={:.2} HAZ={:.2} WAZ={:.2} BMIZ={:.2}",
            z.wfh, z.hfa, z.wfa, z.bmi
        );

        Ok(classify_measurement(measurement, z, &self.config.cutoffs))
    }
}

/// Assess with the default cutoffs and the rejecting input policy.
pub fn assess_nutritional_status(measurement: &ChildMeasurement) -> AssessmentOutcome<AssessmentResult> {
    Assessor::default().assess(measurement)
}

/// Compute the four Z-scores for a measurement. Total; may return non-finite values.
pub fn compute_z_scores(measurement: &ChildMeasurement) -> ZScores {
    let age_in_months = normalize_age_to_months(measurement.age, measurement.age_unit);
    let bmi = calculate_bmi(measurement.weight_kg, measurement.height_cm);
    let sex = measurement.sex;

    let weight_ref = reference_point(age_in_months, sex, MeasurementKind::WeightForAge);
    let height_ref = reference_point(age_in_months, sex, MeasurementKind::HeightForAge);
    let wfh_ref = reference_point(age_in_months, sex, MeasurementKind::WeightForHeight);
    let bmi_ref = reference_point(age_in_months, sex, MeasurementKind::BmiForAge);

    ZScores {
        wfa: calculate_z_score(measurement.weight_kg, weight_ref.median, weight_ref.standard_deviation),
        hfa: calculate_z_score(measurement.height_cm, height_ref.median, height_ref.standard_deviation),
        wfh: calculate_z_score(
            weight_per_height_cm(measurement.weight_kg, measurement.height_cm),
            wfh_ref.median,
            wfh_ref.standard_deviation,
        ),
        bmi: calculate_z_score(bmi, bmi_ref.median, bmi_ref.standard_deviation),
    }
}

/// Check the measurement can't make the arithmetic degenerate
pub fn validate_measurement(m: &ChildMeasurement) -> AssessmentOutcome<()> {
    fn invalid(field: &'static str, value: f64, reason: &'static str) -> AssessmentError {
        AssessmentError::InvalidMeasurement { field, value, reason }
    }

    if !m.age.is_finite() || m.age < 0.0 {
        return Err(invalid("age", m.age, "must be a finite, non-negative number"));
    }
    if !m.weight_kg.is_finite() || m.weight_kg <= 0.0 {
        return Err(invalid("weightKg", m.weight_kg, "must be a finite, positive number"));
    }
    if !m.height_cm.is_finite() || m.height_cm <= 0.0 {
        return Err(invalid("heightCm", m.height_cm, "must be a finite, positive number"));
    }
    if let Some(muac) = m.muac_cm {
        if !muac.is_finite() || muac <= 0.0 {
            return Err(invalid("muacCm", muac, "must be a finite, positive number"));
        }
    }
    Ok(())
}
