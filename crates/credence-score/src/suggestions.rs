//! Ranked improvement suggestions for weak factors.
//!
//! A factor below [`SUGGESTION_THRESHOLD`] gets a suggestion whose
//! `potential_gain` is the bonus points it would add at a raw score of 100:
//! `round((100 - raw) * weight * 5.5)`, with 5.5 being
//! [`BONUS_PER_FACTOR_POINT`].
//!
//! Priority policy:
//!
//! | Factor            | Priority                    |
//! |-------------------|-----------------------------|
//! | Activity history  | high below 40, else medium  |
//! | Account age       | always low                  |
//! | Engagement        | high below 50, else medium  |
//! | Reliability       | always high                 |
//! | Balance stability | medium below 40, else low   |
//!
//! Output order: priority (high first), then potential gain descending, then
//! a fixed factor precedence with reliability first.

use std::cmp::Reverse;

use credence_core::constants::{BONUS_PER_FACTOR_POINT, FACTOR_SCALE, SUGGESTION_THRESHOLD};
use credence_core::types::{Assessment, Factor, ImprovementSuggestion, Priority};

use crate::analysis::analyze;

/// Suggestions for every factor scoring below 70, most actionable first.
///
/// Returns an empty list when no factor needs improvement.
pub fn suggest(assessment: &Assessment) -> Vec<ImprovementSuggestion> {
    let mut suggestions: Vec<ImprovementSuggestion> = analyze(assessment)
        .into_iter()
        .filter(|f| f.raw_score < SUGGESTION_THRESHOLD)
        .map(|f| ImprovementSuggestion {
            factor: f.factor,
            potential_gain: potential_gain(f.raw_score, f.weight),
            suggestion: advice(f.factor).to_string(),
            priority: priority(f.factor, f.raw_score),
            current_score: f.raw_score,
            name: f.name,
        })
        .collect();

    suggestions.sort_by_key(|s| (s.priority, Reverse(s.potential_gain), precedence(s.factor)));
    suggestions
}

/// Bonus points gained by lifting a factor from `raw_score` to 100.
pub fn potential_gain(raw_score: f64, weight: f64) -> u16 {
    ((FACTOR_SCALE - raw_score) * weight * BONUS_PER_FACTOR_POINT).round() as u16
}

pub fn priority(factor: Factor, raw_score: f64) -> Priority {
    match factor {
        Factor::ActivityHistory if raw_score < 40.0 => Priority::High,
        Factor::ActivityHistory => Priority::Medium,
        // Age cannot be accelerated by anything the user does.
        Factor::AccountAge => Priority::Low,
        Factor::Engagement if raw_score < 50.0 => Priority::High,
        Factor::Engagement => Priority::Medium,
        Factor::Reliability => Priority::High,
        Factor::BalanceStability if raw_score < 40.0 => Priority::Medium,
        Factor::BalanceStability => Priority::Low,
    }
}

/// Tie-break among suggestions with equal priority and gain.
fn precedence(factor: Factor) -> u8 {
    match factor {
        Factor::Reliability => 0,
        Factor::ActivityHistory => 1,
        Factor::Engagement => 2,
        Factor::BalanceStability => 3,
        Factor::AccountAge => 4,
    }
}

fn advice(factor: Factor) -> &'static str {
    match factor {
        Factor::ActivityHistory => "Increase your on-chain activity by making more transactions",
        Factor::AccountAge => "Continue using your account consistently over time",
        Factor::Engagement => "Engage with more protocols, such as lending, swapping or staking",
        Factor::Reliability => "Maintain timely repayments and fulfill all obligations",
        Factor::BalanceStability => {
            "Maintain a higher balance to demonstrate financial stability"
        }
    }
}
