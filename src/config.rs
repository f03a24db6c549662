//! Assessment Configuration
//!
//! Classification cutoffs and the policy for degenerate measurements.
//! Defaults reproduce the WHO-style cutoffs the assessment form uses; a JSON
//! file may override any subset of them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, AssessmentOutcome};

/// What to do with measurements that make the arithmetic degenerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInputPolicy {
    /// Reject non-positive height/weight/MUAC, negative age and non-finite values
    #[default]
    Reject,
    /// Compute anyway; non-finite Z-scores reach the classifier
    Propagate,
}

/// Z-score and MUAC thresholds used by the classification rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cutoffs {
    /// WHZ below this is SAM
    pub sam_z: f64,
    /// WHZ below this (and at or above `sam_z`) is MAM
    pub mam_z: f64,
    /// HAZ below this is stunting
    pub stunting_z: f64,
    /// HAZ below this is severe stunting
    pub severe_stunting_z: f64,
    /// WAZ below this is underweight
    pub underweight_z: f64,
    /// BMIZ above this is overweight/obese
    pub overweight_z: f64,
    /// MUAC below this is SAM
    pub sam_muac_cm: f64,
    /// MUAC below this (and at or above `sam_muac_cm`) is MAM
    pub mam_muac_cm: f64,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            sam_z: -3.0,
            mam_z: -2.0,
            stunting_z: -2.0,
            severe_stunting_z: -3.0,
            underweight_z: -2.0,
            overweight_z: 2.0,
            sam_muac_cm: 11.5,
            mam_muac_cm: 12.5,
        }
    }
}

impl Cutoffs {
    pub fn validate(&self) -> AssessmentOutcome<()> {
        let values = [
            ("sam_z", self.sam_z),
            ("mam_z", self.mam_z),
            ("stunting_z", self.stunting_z),
            ("severe_stunting_z", self.severe_stunting_z),
            ("underweight_z", self.underweight_z),
            ("overweight_z", self.overweight_z),
            ("sam_muac_cm", self.sam_muac_cm),
            ("mam_muac_cm", self.mam_muac_cm),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AssessmentError::Config(format!("{} must be finite, got {}", name, value)));
        }
        if self.sam_z >= self.mam_z {
            return Err(AssessmentError::Config(format!(
                "sam_z ({}) must be below mam_z ({})",
                self.sam_z, self.mam_z
            )));
        }
        if self.severe_stunting_z > self.stunting_z {
            return Err(AssessmentError::Config(format!(
                "severe_stunting_z ({}) must not exceed stunting_z ({})",
                self.severe_stunting_z, self.stunting_z
            )));
        }
        if self.sam_muac_cm >= self.mam_muac_cm {
            return Err(AssessmentError::Config(format!(
                "sam_muac_cm ({}) must be below mam_muac_cm ({})",
                self.sam_muac_cm, self.mam_muac_cm
            )));
        }
        Ok(())
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    pub cutoffs: Cutoffs,
    pub degenerate_input: DegenerateInputPolicy,
}

impl AssessmentConfig {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read assessment config: {:?}", path))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Invalid assessment config: {:?}", path))?;

        tracing::debug!("Loaded assessment config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AssessmentConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse assessment config JSON")?;
        config.cutoffs.validate()?;
        Ok(config)
    }
}
