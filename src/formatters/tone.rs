//! Display tone for status strings.

use serde::Serialize;

/// Visual severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Severe,
    Moderate,
    Normal,
    Info,
}

impl StatusTone {
    /// Tone for a primary or detailed status string.
    ///
    /// Matches on text so detailed labels such as
    /// "Stunted (Chronic Malnutrition) - Severe" read as severe too.
    pub fn for_status(status: &str) -> Self {
        if status.contains("Severe") {
            StatusTone::Severe
        } else if status.contains("Moderate") {
            StatusTone::Moderate
        } else if status == "Normal nutritional status" {
            StatusTone::Normal
        } else {
            StatusTone::Info
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Severe => "red",
            StatusTone::Moderate => "orange",
            StatusTone::Normal => "green",
            StatusTone::Info => "blue",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusTone::Severe => "🔴",
            StatusTone::Moderate => "🟠",
            StatusTone::Normal => "🟢",
            StatusTone::Info => "🔵",
        }
    }
}
