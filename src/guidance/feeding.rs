//! Age-banded general feeding guidance.
//!
//! Four bands: under 6 months, 6-11, 12-23, 24 and over.

use serde::{Deserialize, Serialize};

use crate::assessment::NutritionalStatus;

/// Feeding stage by age in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedingBand {
    /// < 6 months
    ExclusiveBreastfeeding,
    /// 6-11 months
    ComplementaryFeeding,
    /// 12-23 months
    FamilyFoods,
    /// >= 24 months
    BalancedDiet,
}

impl FeedingBand {
    pub fn for_age(age_in_months: f64) -> Self {
        if age_in_months < 6.0 {
            FeedingBand::ExclusiveBreastfeeding
        } else if age_in_months < 12.0 {
            FeedingBand::ComplementaryFeeding
        } else if age_in_months < 24.0 {
            FeedingBand::FamilyFoods
        } else {
            // NaN lands here too
            FeedingBand::BalancedDiet
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FeedingBand::ExclusiveBreastfeeding => "0-5 months",
            FeedingBand::ComplementaryFeeding => "6-11 months",
            FeedingBand::FamilyFoods => "12-23 months",
            FeedingBand::BalancedDiet => "24 months and older",
        }
    }

    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            FeedingBand::ExclusiveBreastfeeding => &[
                "Exclusive breastfeeding is recommended for the first 6 months",
                "No other foods or liquids are needed during this period",
                "Breastfeed on demand, at least 8 times in 24 hours",
            ],
            FeedingBand::ComplementaryFeeding => &[
                "Continue breastfeeding on demand",
                "Introduce complementary foods starting with iron-rich foods",
                "Gradually increase food variety, consistency and amount",
                "Feed 2-3 meals per day with 1-2 nutritious snacks",
            ],
            FeedingBand::FamilyFoods => &[
                "Continue breastfeeding up to 2 years or beyond",
                "Provide diverse family foods with a variety of textures",
                "Feed 3-4 meals per day with 1-2 nutritious snacks",
                "Ensure adequate iron, vitamin A, and calcium intake",
            ],
            FeedingBand::BalancedDiet => &[
                "Provide a balanced diet with foods from all food groups",
                "Include protein-rich foods, fruits, and vegetables daily",
                "Limit processed foods, sugars and salt",
                "Ensure adequate intake of essential nutrients (iron, calcium, vitamins)",
            ],
        }
    }
}

/// General feeding guidance for an age.
///
/// The status is accepted so callers can pass an assessment result straight
/// through; the guidance is general and does not vary with it.
pub fn nutrition_recommendations(
    age_in_months: f64,
    _status: Option<NutritionalStatus>,
) -> &'static [&'static str] {
    FeedingBand::for_age(age_in_months).guidance()
}
