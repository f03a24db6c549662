//! Malnutrition Statistics
//!
//! Read-only prevalence and nutrient-need tables for the statistics charts.
//! Illustrative figures for display; nothing here feeds the assessment.

use serde::Serialize;

/// Prevalence (%) for one age band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgePrevalence {
    pub age: &'static str,
    pub percentage: f64,
}

/// Prevalence (%) of the three burdens in one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalPrevalence {
    pub region: &'static str,
    pub stunting: f64,
    pub wasting: f64,
    pub overweight: f64,
}

/// Daily requirement of one nutrient per age group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientNeed {
    pub nutrient: &'static str,
    pub infant: f64,
    pub toddler: f64,
    pub preschool: f64,
    pub school: f64,
}

/// All chart datasets
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MalnutritionStats {
    pub global_stunting: &'static [AgePrevalence],
    pub global_wasting: &'static [AgePrevalence],
    pub regional_data: &'static [RegionalPrevalence],
    pub daily_nutrient_needs: &'static [NutrientNeed],
}

static GLOBAL_STUNTING: &[AgePrevalence] = &[
    AgePrevalence { age: "Under 6 months", percentage: 22.3 },
    AgePrevalence { age: "6-11 months", percentage: 28.7 },
    AgePrevalence { age: "12-23 months", percentage: 32.5 },
    AgePrevalence { age: "24-35 months", percentage: 31.2 },
    AgePrevalence { age: "36-47 months", percentage: 29.8 },
    AgePrevalence { age: "48-59 months", percentage: 28.2 },
];

static GLOBAL_WASTING: &[AgePrevalence] = &[
    AgePrevalence { age: "Under 6 months", percentage: 12.1 },
    AgePrevalence { age: "6-11 months", percentage: 15.8 },
    AgePrevalence { age: "12-23 months", percentage: 10.3 },
    AgePrevalence { age: "24-35 months", percentage: 7.5 },
    AgePrevalence { age: "36-47 months", percentage: 6.2 },
    AgePrevalence { age: "48-59 months", percentage: 5.5 },
];

static REGIONAL_DATA: &[RegionalPrevalence] = &[
    RegionalPrevalence { region: "Africa", stunting: 30.7, wasting: 7.1, overweight: 4.9 },
    RegionalPrevalence { region: "Asia", stunting: 21.8, wasting: 9.1, overweight: 5.2 },
    RegionalPrevalence { region: "Latin America", stunting: 9.0, wasting: 1.3, overweight: 7.5 },
    RegionalPrevalence { region: "Oceania", stunting: 38.1, wasting: 9.5, overweight: 3.9 },
    RegionalPrevalence { region: "North America", stunting: 2.6, wasting: 0.5, overweight: 9.1 },
    RegionalPrevalence { region: "Europe", stunting: 4.5, wasting: 0.8, overweight: 8.3 },
];

static DAILY_NUTRIENT_NEEDS: &[NutrientNeed] = &[
    NutrientNeed { nutrient: "Protein (g)", infant: 11.0, toddler: 13.0, preschool: 19.0, school: 34.0 },
    NutrientNeed { nutrient: "Calcium (mg)", infant: 270.0, toddler: 500.0, preschool: 700.0, school: 1000.0 },
    NutrientNeed { nutrient: "Iron (mg)", infant: 11.0, toddler: 7.0, preschool: 10.0, school: 8.0 },
    NutrientNeed { nutrient: "Zinc (mg)", infant: 3.0, toddler: 3.0, preschool: 5.0, school: 8.0 },
    NutrientNeed { nutrient: "Vitamin A (μg)", infant: 400.0, toddler: 300.0, preschool: 400.0, school: 600.0 },
    NutrientNeed { nutrient: "Vitamin C (mg)", infant: 50.0, toddler: 15.0, preschool: 25.0, school: 45.0 },
];

pub fn malnutrition_stats() -> MalnutritionStats {
    MalnutritionStats {
        global_stunting: GLOBAL_STUNTING,
        global_wasting: GLOBAL_WASTING,
        regional_data: REGIONAL_DATA,
        daily_nutrient_needs: DAILY_NUTRIENT_NEEDS,
    }
}

impl MalnutritionStats {
    pub fn region(&self, name: &str) -> Option<&'static RegionalPrevalence> {
        self.regional_data.iter().find(|r| r.region.eq_ignore_ascii_case(name))
    }

    /// Age band with the highest stunting prevalence
    pub fn peak_stunting_age(&self) -> Option<&'static AgePrevalence> {
        self.global_stunting
            .iter()
            .max_by(|a, b| a.percentage.partial_cmp(&b.percentage).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bands_align() {
        let stats = malnutrition_stats();
        let stunting: Vec<_> = stats.global_stunting.iter().map(|p| p.age).collect();
        let wasting: Vec<_> = stats.global_wasting.iter().map(|p| p.age).collect();
        assert_eq!(stunting, wasting);
        assert_eq!(stunting.len(), 6);
    }

    #[test]
    fn test_region_lookup() {
        let stats = malnutrition_stats();
        assert_eq!(stats.region("oceania").map(|r| r.stunting), Some(38.1));
        assert!(stats.region("Antarctica").is_none());
    }

    #[test]
    fn test_peak_stunting() {
        assert_eq!(malnutrition_stats().peak_stunting_age().map(|p| p.age), Some("12-23 months"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(malnutrition_stats()).unwrap();
        assert!(json.get("globalStunting").is_some());
        assert!(json.get("dailyNutrientNeeds").is_some());
        assert_eq!(json["regionalData"][0]["region"], "Africa");
    }
}
