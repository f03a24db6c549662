//! Child Nutrition Assessment
//!
//! Converts anthropometric measurements into Z-scores and a nutritional status
//! classification using simplified linear approximations of the WHO growth
//! reference medians/SDs. Not clinically accurate.
//!
//! - `assessment/`: reference table, Z-score arithmetic, classification rules
//! - `guidance/`: general age-banded feeding guidance
//! - `stats`: read-only malnutrition statistics for charts
//! - `screening`: parallel cohort assessment and prevalence summary
//! - `formatters/`: markdown/JSON rendering of a result
//! - `config`: cutoffs and degenerate-input policy

pub mod error;
pub mod config;
pub mod assessment;
pub mod guidance;
pub mod stats;
pub mod screening;
pub mod formatters;

// Re-export commonly used types
pub use error::{AssessmentError, AssessmentOutcome};
pub use config::{AssessmentConfig, Cutoffs, DegenerateInputPolicy};
pub use assessment::{
    AgeUnit, AssessmentResult, Assessor, ChildMeasurement, Condition, NutritionalStatus, Sex, ZScores,
    assess_nutritional_status,
};
pub use guidance::nutrition_recommendations;
pub use stats::malnutrition_stats;
pub use screening::{screen_cohort, CohortReport, CohortSummary, ScreeningOutcome};
