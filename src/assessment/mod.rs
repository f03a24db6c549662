//! Nutritional Status Assessment
//!
//! Converts a child's anthropometric measurements into WHZ/HAZ/WAZ/BMIZ
//! Z-scores and classifies nutritional status.
//!
//! ## Architecture
//! - `types.rs` - input/output records
//! - `reference.rs` - linear growth reference table (median/SD)
//! - `anthropometry.rs` - age normalization, BMI, Z-score arithmetic
//! - `classify.rs` - ordered classification rules
//! - `engine.rs` - `Assessor`, validation, end-to-end assessment

pub mod types;
pub mod reference;
pub mod anthropometry;
pub mod classify;
pub mod engine;

// Re-export public API
pub use types::{
    AgeUnit,
    Sex,
    ChildMeasurement,
    ZScores,
    NutritionalStatus,
    Condition,
    AssessmentResult,
};
pub use reference::{MeasurementKind, ReferenceBranch, ReferencePoint, reference_point};
pub use anthropometry::{normalize_age_to_months, calculate_bmi, calculate_z_score};
pub use classify::{classify, classify_measurement, Classification, RuleInput, CLASSIFICATION_RULES};
pub use engine::{Assessor, assess_nutritional_status, compute_z_scores, validate_measurement};
