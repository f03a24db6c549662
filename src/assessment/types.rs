//! Input and output records for a nutritional assessment.
//!
//! Wire names follow the assessment form: camelCase, with `gender` and `edema`
//! accepted as aliases for `sex` and `hasEdema`.

use serde::{Deserialize, Serialize};

/// Unit the caller measured age in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Months,
    Years,
}

/// Sex as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    /// Uses the male reference branch (see `reference::ReferenceBranch`)
    Other,
}

/// One child's anthropometric measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMeasurement {
    pub age: f64,
    pub age_unit: AgeUnit,
    #[serde(alias = "gender")]
    pub sex: Sex,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(alias = "height")]
    pub height_cm: f64,
    /// Mid-upper-arm circumference; only meaningful for 6-59 months, not enforced here
    #[serde(default, alias = "muac", skip_serializing_if = "Option::is_none")]
    pub muac_cm: Option<f64>,
    /// Bilateral pitting edema
    #[serde(default, alias = "edema")]
    pub has_edema: bool,
}

impl ChildMeasurement {
    pub fn new(age: f64, age_unit: AgeUnit, sex: Sex, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            age,
            age_unit,
            sex,
            weight_kg,
            height_cm,
            muac_cm: None,
            has_edema: false,
        }
    }

    pub fn with_muac(mut self, muac_cm: f64) -> Self {
        self.muac_cm = Some(muac_cm);
        self
    }

    pub fn with_edema(mut self, has_edema: bool) -> Self {
        self.has_edema = has_edema;
        self
    }
}

/// The four anthropometric indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZScores {
    /// Weight-for-height (WHZ)
    pub wfh: f64,
    /// Height-for-age (HAZ)
    pub hfa: f64,
    /// Weight-for-age (WAZ)
    pub wfa: f64,
    /// BMI-for-age (BMIZ)
    pub bmi: f64,
}

impl ZScores {
    pub fn all_finite(&self) -> bool {
        self.wfh.is_finite() && self.hfa.is_finite() && self.wfa.is_finite() && self.bmi.is_finite()
    }
}

/// Primary nutritional status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutritionalStatus {
    #[serde(rename = "Severe Acute Malnutrition")]
    SevereAcuteMalnutrition,
    #[serde(rename = "Moderate Acute Malnutrition")]
    ModerateAcuteMalnutrition,
    #[serde(rename = "Overweight/Obese")]
    OverweightObese,
    Normal,
}

impl NutritionalStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            NutritionalStatus::SevereAcuteMalnutrition => "Severe Acute Malnutrition",
            NutritionalStatus::ModerateAcuteMalnutrition => "Moderate Acute Malnutrition",
            NutritionalStatus::OverweightObese => "Overweight/Obese",
            NutritionalStatus::Normal => "Normal",
        }
    }

    pub fn from_display_text(text: &str) -> Option<Self> {
        match text {
            "Severe Acute Malnutrition" => Some(NutritionalStatus::SevereAcuteMalnutrition),
            "Moderate Acute Malnutrition" => Some(NutritionalStatus::ModerateAcuteMalnutrition),
            "Overweight/Obese" => Some(NutritionalStatus::OverweightObese),
            "Normal" => Some(NutritionalStatus::Normal),
            _ => None,
        }
    }
}

impl std::fmt::Display for NutritionalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}

/// A specific condition detected by one classification rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    SevereAcuteMalnutrition,
    ModerateAcuteMalnutrition,
    Stunted,
    SeverelyStunted,
    Underweight,
    OverweightObese,
    Normal,
}

impl Condition {
    /// Label as it appears in `AssessmentResult::detailed_status`
    pub fn label(&self) -> &'static str {
        match self {
            Condition::SevereAcuteMalnutrition => "Severe Acute Malnutrition (SAM)",
            Condition::ModerateAcuteMalnutrition => "Moderate Acute Malnutrition (MAM)",
            Condition::Stunted => "Stunted (Chronic Malnutrition)",
            Condition::SeverelyStunted => "Stunted (Chronic Malnutrition) - Severe",
            Condition::Underweight => "Underweight",
            Condition::OverweightObese => "Overweight/Obese",
            Condition::Normal => "Normal nutritional status",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Condition::SevereAcuteMalnutrition => &[
                "Urgent medical attention is required. Please visit a healthcare facility immediately.",
                "Therapeutic feeding program with Ready-to-Use Therapeutic Food (RUTF) may be necessary.",
            ],
            Condition::ModerateAcuteMalnutrition => &[
                "Supplementary feeding program is recommended.",
                "Regular monitoring of growth is essential.",
            ],
            Condition::Stunted | Condition::SeverelyStunted => &[
                "Focus on long-term nutritional support and micronutrient supplementation.",
            ],
            Condition::Underweight => &["Energy-dense foods rich in nutrients are recommended."],
            Condition::OverweightObese => &[
                "Balanced diet with portion control is recommended.",
                "Regular physical activity appropriate for age.",
            ],
            Condition::Normal => &[
                "Continue with age-appropriate balanced diet.",
                "Regular growth monitoring is recommended.",
            ],
        }
    }
}

/// Result of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    #[serde(rename = "wfhZScore")]
    pub wfh_z: f64,
    #[serde(rename = "hfaZScore")]
    pub hfa_z: f64,
    #[serde(rename = "wfaZScore")]
    pub wfa_z: f64,
    #[serde(rename = "bmiZScore")]
    pub bmi_z: f64,
    pub nutritional_status: NutritionalStatus,
    /// Matched conditions, in rule order. Never empty.
    #[serde(skip)]
    pub conditions: Vec<Condition>,
    pub detailed_status: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    pub fn z_scores(&self) -> ZScores {
        ZScores {
            wfh: self.wfh_z,
            hfa: self.hfa_z,
            wfa: self.wfa_z,
            bmi: self.bmi_z,
        }
    }

    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn has_non_finite_scores(&self) -> bool {
        !self.z_scores().all_finite()
    }
}
