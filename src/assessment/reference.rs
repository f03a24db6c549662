//! Growth Reference Lookup Tables
//!
//! Median and standard deviation per measurement kind, as linear functions of
//! age in months. These are simplified approximations of the WHO growth
//! references and are NOT clinically accurate; they are reproduced exactly as
//! the assessment form has always used them.
//!
//! | kind              | branch     | median          | sd              |
//! |-------------------|------------|-----------------|-----------------|
//! | weight-for-age    | male/other | 7 + 0.2·m       | 0.5 + 0.01·m    |
//! | weight-for-age    | female     | 6.5 + 0.19·m    | 0.5 + 0.01·m    |
//! | height-for-age    | male/other | 50 + 0.5·m      | 2 + 0.02·m      |
//! | height-for-age    | female     | 49 + 0.5·m      | 2 + 0.02·m      |
//! | weight-for-height | male/other | 0.17            | 0.02            |
//! | weight-for-height | female     | 0.16            | 0.02            |
//! | BMI-for-age       | male/other | 15 + 0.01·m     | 1.5             |
//! | BMI-for-age       | female     | 14.5 + 0.01·m   | 1.5             |

use serde::{Deserialize, Serialize};

use super::types::Sex;

/// Anthropometric index a reference point applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    WeightForAge,
    HeightForAge,
    /// Measured as kg per cm of height
    WeightForHeight,
    BmiForAge,
}

impl MeasurementKind {
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::WeightForAge,
        MeasurementKind::HeightForAge,
        MeasurementKind::WeightForHeight,
        MeasurementKind::BmiForAge,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            MeasurementKind::WeightForAge => "Weight for Age",
            MeasurementKind::HeightForAge => "Height for Age",
            MeasurementKind::WeightForHeight => "Weight for Height",
            MeasurementKind::BmiForAge => "BMI for Age",
        }
    }

    /// Short index code (WAZ, HAZ, WHZ, BMIZ)
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementKind::WeightForAge => "WAZ",
            MeasurementKind::HeightForAge => "HAZ",
            MeasurementKind::WeightForHeight => "WHZ",
            MeasurementKind::BmiForAge => "BMIZ",
        }
    }
}

/// Which half of the reference table a sex maps onto.
///
/// There are only two branches. `Sex::Other` is aliased onto `Male`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceBranch {
    Male,
    Female,
}

impl ReferenceBranch {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => ReferenceBranch::Male,
            Sex::Other => ReferenceBranch::Male,
            Sex::Female => ReferenceBranch::Female,
        }
    }
}

/// Median and SD of the reference population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePoint {
    pub median: f64,
    pub standard_deviation: f64,
}

/// One row of the reference table: intercept + slope·months for both moments
#[derive(Debug, Clone, Copy)]
struct LinearReference {
    kind: MeasurementKind,
    branch: ReferenceBranch,
    median_intercept: f64,
    median_slope: f64,
    sd_intercept: f64,
    sd_slope: f64,
}

impl LinearReference {
    fn at(&self, age_in_months: f64) -> ReferencePoint {
        ReferencePoint {
            median: self.median_intercept + age_in_months * self.median_slope,
            standard_deviation: self.sd_intercept + age_in_months * self.sd_slope,
        }
    }
}

// ============================================================================
// EMBEDDED REFERENCE TABLE
// ============================================================================

// Ordered by kind, then branch (male before female); see `table_index`.
static REFERENCE_TABLE: [LinearReference; 8] = [
    LinearReference { kind: MeasurementKind::WeightForAge, branch: ReferenceBranch::Male, median_intercept: 7.0, median_slope: 0.2, sd_intercept: 0.5, sd_slope: 0.01 },
    LinearReference { kind: MeasurementKind::WeightForAge, branch: ReferenceBranch::Female, median_intercept: 6.5, median_slope: 0.19, sd_intercept: 0.5, sd_slope: 0.01 },
    LinearReference { kind: MeasurementKind::HeightForAge, branch: ReferenceBranch::Male, median_intercept: 50.0, median_slope: 0.5, sd_intercept: 2.0, sd_slope: 0.02 },
    LinearReference { kind: MeasurementKind::HeightForAge, branch: ReferenceBranch::Female, median_intercept: 49.0, median_slope: 0.5, sd_intercept: 2.0, sd_slope: 0.02 },
    LinearReference { kind: MeasurementKind::WeightForHeight, branch: ReferenceBranch::Male, median_intercept: 0.17, median_slope: 0.0, sd_intercept: 0.02, sd_slope: 0.0 },
    LinearReference { kind: MeasurementKind::WeightForHeight, branch: ReferenceBranch::Female, median_intercept: 0.16, median_slope: 0.0, sd_intercept: 0.02, sd_slope: 0.0 },
    LinearReference { kind: MeasurementKind::BmiForAge, branch: ReferenceBranch::Male, median_intercept: 15.0, median_slope: 0.01, sd_intercept: 1.5, sd_slope: 0.0 },
    LinearReference { kind: MeasurementKind::BmiForAge, branch: ReferenceBranch::Female, median_intercept: 14.5, median_slope: 0.01, sd_intercept: 1.5, sd_slope: 0.0 },
];

fn table_index(kind: MeasurementKind, branch: ReferenceBranch) -> usize {
    let kind_offset = match kind {
        MeasurementKind::WeightForAge => 0,
        MeasurementKind::HeightForAge => 2,
        MeasurementKind::WeightForHeight => 4,
        MeasurementKind::BmiForAge => 6,
    };
    match branch {
        ReferenceBranch::Male => kind_offset,
        ReferenceBranch::Female => kind_offset + 1,
    }
}

/// Resolve the reference median/SD for a measurement kind.
///
/// Total over any real age; never fails.
pub fn reference_point(age_in_months: f64, sex: Sex, kind: MeasurementKind) -> ReferencePoint {
    let branch = ReferenceBranch::for_sex(sex);
    let row = &REFERENCE_TABLE[table_index(kind, branch)];
    debug_assert_eq!((row.kind, row.branch), (kind, branch));
    row.at(age_in_months)
}
