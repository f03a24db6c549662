//! Anthropometric arithmetic: age normalization, BMI, Z-scores.
//!
//! All functions are total. Degenerate inputs (zero height, zero SD) yield
//! non-finite values; rejecting them is the engine's job.

use super::types::AgeUnit;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an age to months.
#[inline]
pub fn normalize_age_to_months(age: f64, unit: AgeUnit) -> f64 {
    match unit {
        AgeUnit::Years => age * MONTHS_PER_YEAR,
        AgeUnit::Months => age,
    }
}

/// BMI = weight (kg) / height (m)^2
#[inline]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Weight per centimetre of height, the quantity the weight-for-height reference is expressed in.
#[inline]
pub fn weight_per_height_cm(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / height_cm
}

/// Z = (measurement - median) / sd
#[inline]
pub fn calculate_z_score(measurement: f64, median: f64, standard_deviation: f64) -> f64 {
    (measurement - median) / standard_deviation
}
