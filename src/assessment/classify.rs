//! Classification rules for nutritional status.
//!
//! Rules run in a fixed order and each may append one condition. Order matters:
//!
//! | # | Rule            | Predicate (default cutoffs)                     | Primary status          |
//! |---|-----------------|-------------------------------------------------|-------------------------|
//! | 1 | Severe acute    | WHZ < -3, or MUAC < 11.5, or edema              | set SAM                 |
//! | 2 | Moderate acute  | only if rule 1 missed: -3 ≤ WHZ < -2, or 11.5 ≤ MUAC < 12.5 | set MAM     |
//! | 3 | Stunting        | HAZ < -2 (severe below -3)                      | unchanged               |
//! | 4 | Underweight     | WAZ < -2                                        | unchanged               |
//! | 5 | Overweight      | BMIZ > 2                                        | set only if still Normal |
//! | - | Fallback        | nothing matched                                 | Normal                  |
//!
//! Primary status is "last write wins" among rules that claim it. Because
//! rule 5 only claims while the status is still Normal, an acute malnutrition
//! status is never replaced by Overweight/Obese.
//!
//! Non-finite Z-scores compare false against every threshold, so they match
//! no Z-score rule. MUAC and edema still apply.

use super::types::{AssessmentResult, ChildMeasurement, Condition, NutritionalStatus, ZScores};
use crate::config::Cutoffs;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleInput {
    pub z: ZScores,
    pub muac_cm: Option<f64>,
    pub has_edema: bool,
}

impl RuleInput {
    pub fn new(measurement: &ChildMeasurement, z: ZScores) -> Self {
        Self {
            z,
            muac_cm: measurement.muac_cm,
            has_edema: measurement.has_edema,
        }
    }

    fn muac_below(&self, cutoff: f64) -> bool {
        self.muac_cm.is_some_and(|muac| muac < cutoff)
    }

    fn muac_within(&self, lower: f64, upper: f64) -> bool {
        self.muac_cm.is_some_and(|muac| muac >= lower && muac < upper)
    }
}

/// How a rule affects the primary status when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryClaim {
    /// Leaves the primary status alone
    None,
    /// Overwrites the primary status
    Set(NutritionalStatus),
    /// Overwrites only while the primary status is still Normal
    SetIfNormal(NutritionalStatus),
}

type RulePredicate = fn(&RuleInput, &Cutoffs, &[Condition]) -> Option<Condition>;

/// One step of the classification sequence
pub struct ClassificationRule {
    pub name: &'static str,
    pub claim: PrimaryClaim,
    evaluate: RulePredicate,
}

impl ClassificationRule {
    pub fn evaluate(&self, input: &RuleInput, cutoffs: &Cutoffs, matched: &[Condition]) -> Option<Condition> {
        (self.evaluate)(input, cutoffs, matched)
    }
}

fn severe_acute(input: &RuleInput, cutoffs: &Cutoffs, _matched: &[Condition]) -> Option<Condition> {
    let hit = input.z.wfh < cutoffs.sam_z || input.muac_below(cutoffs.sam_muac_cm) || input.has_edema;
    hit.then_some(Condition::SevereAcuteMalnutrition)
}

fn moderate_acute(input: &RuleInput, cutoffs: &Cutoffs, matched: &[Condition]) -> Option<Condition> {
    // else-branch of the severe rule
    if matched.contains(&Condition::SevereAcuteMalnutrition) {
        return None;
    }
    let wfh = input.z.wfh;
    let hit = (wfh >= cutoffs.sam_z && wfh < cutoffs.mam_z)
        || input.muac_within(cutoffs.sam_muac_cm, cutoffs.mam_muac_cm);
    hit.then_some(Condition::ModerateAcuteMalnutrition)
}

fn stunting(input: &RuleInput, cutoffs: &Cutoffs, _matched: &[Condition]) -> Option<Condition> {
    let hfa = input.z.hfa;
    if hfa < cutoffs.severe_stunting_z {
        Some(Condition::SeverelyStunted)
    } else if hfa < cutoffs.stunting_z {
        Some(Condition::Stunted)
    } else {
        None
    }
}

fn underweight(input: &RuleInput, cutoffs: &Cutoffs, _matched: &[Condition]) -> Option<Condition> {
    (input.z.wfa < cutoffs.underweight_z).then_some(Condition::Underweight)
}

fn overweight(input: &RuleInput, cutoffs: &Cutoffs, _matched: &[Condition]) -> Option<Condition> {
    (input.z.bmi > cutoffs.overweight_z).then_some(Condition::OverweightObese)
}

/// The classification sequence. Do not reorder.
pub static CLASSIFICATION_RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        name: "severe_acute_malnutrition",
        claim: PrimaryClaim::Set(NutritionalStatus::SevereAcuteMalnutrition),
        evaluate: severe_acute,
    },
    ClassificationRule {
        name: "moderate_acute_malnutrition",
        claim: PrimaryClaim::Set(NutritionalStatus::ModerateAcuteMalnutrition),
        evaluate: moderate_acute,
    },
    ClassificationRule {
        name: "stunting",
        claim: PrimaryClaim::None,
        evaluate: stunting,
    },
    ClassificationRule {
        name: "underweight",
        claim: PrimaryClaim::None,
        evaluate: underweight,
    },
    ClassificationRule {
        name: "overweight_obese",
        claim: PrimaryClaim::SetIfNormal(NutritionalStatus::OverweightObese),
        evaluate: overweight,
    },
];

/// Primary status plus matched conditions, before labels are attached
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status: NutritionalStatus,
    pub conditions: Vec<Condition>,
}

/// Run the rule sequence over a set of Z-scores and direct measurements.
pub fn classify(input: &RuleInput, cutoffs: &Cutoffs) -> Classification {
    if !input.z.all_finite() {
        tracing::warn!("Non-finite Z-score reached classification: {:?}", input.z);
    }

    let mut status = NutritionalStatus::Normal;
    let mut conditions = Vec::with_capacity(CLASSIFICATION_RULES.len());

    for rule in CLASSIFICATION_RULES.iter() {
        let Some(condition) = rule.evaluate(input, cutoffs, &conditions) else {
            continue;
        };
        tracing::debug!("Rule '{}' matched: {}", rule.name, condition.label());

        match rule.claim {
            PrimaryClaim::None => {}
            PrimaryClaim::Set(claimed) => status = claimed,
            PrimaryClaim::SetIfNormal(claimed) => {
                if status == NutritionalStatus::Normal {
                    status = claimed;
                }
            }
        }
        conditions.push(condition);
    }

    if conditions.is_empty() {
        conditions.push(Condition::Normal);
    }

    Classification { status, conditions }
}

/// Classify a measurement and its Z-scores into a full assessment result.
pub fn classify_measurement(
    measurement: &ChildMeasurement,
    z: ZScores,
    cutoffs: &Cutoffs,
) -> AssessmentResult {
    let Classification { status, conditions } = classify(&RuleInput::new(measurement, z), cutoffs);

    let detailed_status = conditions.iter().map(|c| c.label().to_string()).collect();
    let recommendations = conditions
        .iter()
        .flat_map(|c| c.recommendations().iter().map(|r| r.to_string()))
        .collect();

    AssessmentResult {
        wfh_z: z.wfh,
        hfa_z: z.hfa,
        wfa_z: z.wfa,
        bmi_z: z.bmi,
        nutritional_status: status,
        conditions,
        detailed_status,
        recommendations,
    }
}
