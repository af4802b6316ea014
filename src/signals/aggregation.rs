//! Combine rule outcomes into a single signal

use crate::models::signal::{RuleContribution, Signal};
use crate::signals::categories::ScoreThresholds;
use crate::signals::rules::{Rule, RuleOutcome};

pub struct Aggregator;

impl Aggregator {
    /// Weighted sum of tilts, classified with the fixed thresholds
    ///
    /// Reasons keep rule order; a reason repeated by two rules is listed once.
    pub fn combine(results: &[(Rule, RuleOutcome)]) -> Signal {
        let mut reasons: Vec<String> = Vec::new();
        let mut contributions = Vec::with_capacity(results.len());
        let mut score = 0;

        for (rule, outcome) in results {
            let contribution = rule.weight * outcome.tilt.sign();
            score += contribution;
            contributions.push(RuleContribution {
                rule: rule.name.to_string(),
                weight: rule.weight,
                tilt: outcome.tilt,
                contribution,
            });

            for reason in &outcome.reasons {
                if !reasons.contains(reason) {
                    reasons.push(reason.clone());
                }
            }
        }

        Signal {
            category: ScoreThresholds::classify(score),
            score,
            reasons,
            contributions,
        }
    }
}
