//! Per-factor analysis and score-point breakdown of an assessment.
//!
//! Both are recomputed from `assessment.metrics`, using
//! `assessment.computed_at` as the reference time, so they reproduce exactly
//! the factor scores the assessment was built from.

use credence_core::constants::{BONUS_RANGE, FACTOR_SCALE, MAX_SCORE};
use credence_core::types::{
    Assessment, BreakdownEntry, Factor, FactorAnalysis, Metrics, Rating, ScoreBreakdown,
};

use crate::factors::factor_scores;

/// Analyze every factor of `assessment`, in canonical factor order.
pub fn analyze(assessment: &Assessment) -> Vec<FactorAnalysis> {
    factor_scores(&assessment.metrics, assessment.computed_at)
        .iter()
        .map(|s| FactorAnalysis {
            factor: s.factor,
            name: s.factor.name().to_string(),
            raw_score: s.raw_score,
            weight: s.weight,
            contribution: s.contribution,
            rating: Rating::from_raw_score(s.raw_score),
            description: describe(s.factor, &assessment.metrics),
        })
        .collect()
}

/// Break `assessment` down into the bonus points each factor earned.
///
/// Contribution points are rounded per factor, so they need not add up to
/// `bonus_points` exactly.
pub fn breakdown(assessment: &Assessment) -> ScoreBreakdown {
    let factors = factor_scores(&assessment.metrics, assessment.computed_at)
        .iter()
        .map(|s| BreakdownEntry {
            factor: s.factor,
            name: s.factor.name().to_string(),
            raw_score: s.raw_score,
            weight_percent: s.weight * FACTOR_SCALE,
            contribution_points: contribution_points(s.raw_score, s.weight),
            rating: Rating::from_raw_score(s.raw_score),
        })
        .collect();

    ScoreBreakdown {
        base: assessment.base_score,
        factors,
        total: assessment.final_score,
        max_possible: MAX_SCORE,
    }
}

/// `round(raw * weight * 550 / 100)`.
fn contribution_points(raw_score: f64, weight: f64) -> u16 {
    (raw_score * weight * f64::from(BONUS_RANGE) / FACTOR_SCALE).round() as u16
}

fn describe(factor: Factor, metrics: &Metrics) -> String {
    match factor {
        Factor::ActivityHistory => format!("{} actions on record", metrics.activity_count),
        Factor::AccountAge => format!("{} months of history", metrics.age_months),
        Factor::Engagement => format!("{}% protocol engagement", metrics.engagement_score),
        Factor::Reliability => {
            format!("{}% of obligations met on time", metrics.reliability_rate)
        }
        Factor::BalanceStability => {
            format!("{} credits held", group_thousands(metrics.holding_balance))
        }
    }
}

/// Format a number with comma thousands separators and at most three
/// fraction digits (`1234567.5` → `1,234,567.5`, `1234.56789` → `1,234.568`).
fn group_thousands(value: f64) -> String {
    let text = ((value * 1_000.0).round() / 1_000.0).to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(digits + digits / 3 + 8);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
