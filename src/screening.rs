//! Cohort Screening
//!
//! Assesses many children at once and summarises prevalence per condition.
//! Assessments are independent, so they run in parallel with rayon; output
//! order matches input order.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::assessment::{AssessmentResult, Assessor, ChildMeasurement, Condition, NutritionalStatus};
use crate::error::AssessmentError;

/// Outcome for one child in the cohort
#[derive(Debug, Clone, PartialEq)]
pub enum ScreeningOutcome {
    Assessed(AssessmentResult),
    Rejected(AssessmentError),
}

impl ScreeningOutcome {
    pub fn result(&self) -> Option<&AssessmentResult> {
        match self {
            ScreeningOutcome::Assessed(result) => Some(result),
            ScreeningOutcome::Rejected(_) => None,
        }
    }
}

/// Counts across a screened cohort
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub assessed: usize,
    pub rejected: usize,
    pub condition_counts: FxHashMap<Condition, usize>,
    pub status_counts: FxHashMap<NutritionalStatus, usize>,
}

impl CohortSummary {
    fn record(&mut self, result: &AssessmentResult) {
        self.assessed += 1;
        *self.status_counts.entry(result.nutritional_status).or_insert(0) += 1;
        for condition in &result.conditions {
            *self.condition_counts.entry(*condition).or_insert(0) += 1;
        }
    }

    pub fn count(&self, condition: Condition) -> usize {
        self.condition_counts.get(&condition).copied().unwrap_or(0)
    }

    pub fn status_count(&self, status: NutritionalStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    /// Share of assessed children with the condition, in percent (0 for an empty cohort)
    pub fn prevalence(&self, condition: Condition) -> f64 {
        self.percent_of_assessed(self.count(condition))
    }

    /// Stunting prevalence including severe stunting
    pub fn stunting_prevalence(&self) -> f64 {
        self.percent_of_assessed(self.count(Condition::Stunted) + self.count(Condition::SeverelyStunted))
    }

    /// SAM + MAM prevalence
    pub fn acute_malnutrition_prevalence(&self) -> f64 {
        self.percent_of_assessed(
            self.count(Condition::SevereAcuteMalnutrition) + self.count(Condition::ModerateAcuteMalnutrition),
        )
    }

    fn percent_of_assessed(&self, count: usize) -> f64 {
        if self.assessed == 0 {
            return 0.0;
        }
        count as f64 / self.assessed as f64 * 100.0
    }
}

/// Per-child outcomes plus the cohort summary
#[derive(Debug, Clone)]
pub struct CohortReport {
    pub outcomes: Vec<ScreeningOutcome>,
    pub summary: CohortSummary,
}

/// Assess every measurement in parallel. Rejected measurements are counted, not fatal.
pub fn screen_cohort(assessor: &Assessor, measurements: &[ChildMeasurement]) -> CohortReport {
    let outcomes: Vec<ScreeningOutcome> = measurements
        .par_iter()
        .map(|m| match assessor.assess(m) {
            Ok(result) => ScreeningOutcome::Assessed(result),
            Err(err) => ScreeningOutcome::Rejected(err),
        })
        .collect();

    let mut summary = CohortSummary::default();
    for outcome in &outcomes {
        match outcome {
            ScreeningOutcome::Assessed(result) => summary.record(result),
            ScreeningOutcome::Rejected(_) => summary.rejected += 1,
        }
    }

    tracing::info!(
        "Screened {} children: {} assessed, {} rejected",
        measurements.len(),
        summary.assessed,
        summary.rejected
    );

    CohortReport { outcomes, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AgeUnit, Sex};
    use approx::assert_relative_eq;

    fn healthy() -> ChildMeasurement {
        // WAZ -0.8, HAZ 1.67, BMIZ 0.39, WHZ well above the wasting cutoffs
        ChildMeasurement::new(200.0, AgeUnit::Months, Sex::Male, 45.0, 160.0)
    }

    #[test]
    fn test_empty_cohort() {
        let report = screen_cohort(&Assessor::new(), &[]);
        assert!(report.outcomes.is_empty());
        assert_eq!(report.summary.assessed, 0);
        assert_eq!(report.summary.prevalence(Condition::Underweight), 0.0);
    }

    #[test]
    fn test_counts_and_order() {
        let cohort = vec![
            healthy(),
            healthy().with_edema(true),
            ChildMeasurement::new(24.0, AgeUnit::Months, Sex::Male, 10.0, 0.0),
            healthy().with_muac(12.0),
        ];
        let report = screen_cohort(&Assessor::new(), &cohort);

        assert_eq!(report.outcomes.len(), 4);
        assert!(matches!(report.outcomes[2], ScreeningOutcome::Rejected(_)));
        assert_eq!(
            report.outcomes[1].result().map(|r| r.nutritional_status),
            Some(NutritionalStatus::SevereAcuteMalnutrition)
        );

        let summary = &report.summary;
        assert_eq!(summary.assessed, 3);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.count(Condition::SevereAcuteMalnutrition), 1);
        assert_eq!(summary.count(Condition::ModerateAcuteMalnutrition), 1);
        assert_eq!(summary.status_count(NutritionalStatus::Normal), 1);
        assert_relative_eq!(summary.acute_malnutrition_prevalence(), 200.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_stunting_prevalence_includes_severe() {
        let cohort = vec![
            ChildMeasurement { height_cm: 136.0, ..healthy() }, // HAZ -2.33
            ChildMeasurement { height_cm: 130.0, ..healthy() }, // HAZ -3.33
            healthy(),
            healthy(),
        ];
        let summary = screen_cohort(&Assessor::new(), &cohort).summary;
        assert_eq!(summary.count(Condition::Stunted), 1);
        assert_eq!(summary.count(Condition::SeverelyStunted), 1);
        assert_relative_eq!(summary.stunting_prevalence(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = screen_cohort(&Assessor::new(), &[healthy(), healthy().with_edema(true)]).summary;
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["assessed"], 2);
        assert_eq!(json["conditionCounts"]["severe_acute_malnutrition"], 1);
        assert_eq!(json["statusCounts"]["Normal"], 1);
        assert!(json.get("condition_counts").is_none());
        assert!(json.get("status_counts").is_none());
    }
}
