//! Error types for the assessment engine.

use thiserror::Error;

/// Errors raised by the assessment engine.
///
/// The classification itself is total; errors only come from input
/// validation and cutoff configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    /// A measurement would make the arithmetic degenerate (zero height, negative weight, NaN, ...)
    #[error("invalid measurement `{field}` = {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Cutoff configuration is internally inconsistent
    #[error("invalid assessment config: {0}")]
    Config(String),
}

pub type AssessmentOutcome<T> = std::result::Result<T, AssessmentError>;
