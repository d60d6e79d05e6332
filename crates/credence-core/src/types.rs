//! Core scoring types: input metrics, factors, assessments and analytics.
//!
//! Scores are `u16` integers in `MIN_SCORE..=MAX_SCORE`. Factor raw scores are
//! `f64` values in `0.0..=100.0`. Timestamps are epoch milliseconds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    LOW_RISK_MIN_SCORE, MEDIUM_RISK_MIN_SCORE, RATING_EXCELLENT_MIN, RATING_FAIR_MIN,
    RATING_GOOD_MIN, WEIGHT_ACCOUNT_AGE, WEIGHT_ACTIVITY_HISTORY, WEIGHT_BALANCE_STABILITY,
    WEIGHT_ENGAGEMENT, WEIGHT_RELIABILITY,
};

/// Behavioral metrics describing one account's activity history.
///
/// Supplied by an external data-fetch collaborator. Must pass
/// [`validate_metrics`](crate::validation::validate_metrics) before scoring.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Account address. Passed through, never interpreted numerically.
    pub subject_id: String,
    /// Number of historical actions.
    pub activity_count: i64,
    /// Months since the first observed action. May be fractional.
    pub age_months: f64,
    /// Pre-normalized protocol engagement diversity, `0..=100`.
    pub engagement_score: f64,
    /// Percentage of obligations fulfilled on time, `0..=100`.
    pub reliability_rate: f64,
    /// Held balance, used as a stability proxy.
    pub holding_balance: f64,
    /// Epoch milliseconds of the most recent action.
    pub last_activity_at: i64,
}

/// One of the five scored components of an assessment.
///
/// The declaration order is the canonical enumeration order used by the
/// aggregator and by factor analysis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    ActivityHistory,
    AccountAge,
    Engagement,
    Reliability,
    BalanceStability,
}

impl Factor {
    /// All factors in canonical order.
    pub const ALL: [Factor; 5] = [
        Factor::ActivityHistory,
        Factor::AccountAge,
        Factor::Engagement,
        Factor::Reliability,
        Factor::BalanceStability,
    ];

    /// Fixed weight of this factor. Weights of all factors sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Factor::ActivityHistory => WEIGHT_ACTIVITY_HISTORY,
            Factor::AccountAge => WEIGHT_ACCOUNT_AGE,
            Factor::Engagement => WEIGHT_ENGAGEMENT,
            Factor::Reliability => WEIGHT_RELIABILITY,
            Factor::BalanceStability => WEIGHT_BALANCE_STABILITY,
        }
    }

    /// Display name shown to end users.
    pub fn name(&self) -> &'static str {
        match self {
            Factor::ActivityHistory => "Activity History",
            Factor::AccountAge => "Account Age",
            Factor::Engagement => "Engagement",
            Factor::Reliability => "Reliability",
            Factor::BalanceStability => "Balance Stability",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Risk classification of a final score.
///
/// | Final score | Risk   |
/// |-------------|--------|
/// | 750–850     | Low    |
/// | 500–749     | Medium |
/// | 300–499     | High   |
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a final score. Each band includes its lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use credence_core::types::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(750), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_score(749), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(500), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(499), RiskLevel::High);
    /// ```
    pub fn from_score(final_score: u16) -> Self {
        if final_score >= LOW_RISK_MIN_SCORE {
            RiskLevel::Low
        } else if final_score >= MEDIUM_RISK_MIN_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

/// Qualitative rating of a single factor's raw score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    /// Rate a raw factor score: `>=85` excellent, `>=70` good, `>=50` fair.
    pub fn from_raw_score(raw_score: f64) -> Self {
        if raw_score >= RATING_EXCELLENT_MIN {
            Rating::Excellent
        } else if raw_score >= RATING_GOOD_MIN {
            Rating::Good
        } else if raw_score >= RATING_FAIR_MIN {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::Poor => "poor",
        })
    }
}

/// Priority of an improvement suggestion.
///
/// Ordering follows declaration order, so sorting ascending puts `High` first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

/// The result of scoring one [`Metrics`] record.
///
/// A value object: derived analytics are recomputed from `metrics` and
/// `computed_at` on demand and never cached here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Copied from `metrics.subject_id`.
    pub subject_id: String,
    /// The scored input, retained for later analytics.
    pub metrics: Metrics,
    /// Constant score floor ([`BASE_SCORE`](crate::constants::BASE_SCORE)).
    pub base_score: u16,
    /// Points earned on top of the base score, `0..=550`.
    pub bonus_points: u16,
    /// `clamp(base_score + bonus_points, 300, 850)`.
    pub final_score: u16,
    pub risk_level: RiskLevel,
    /// Epoch milliseconds at which the score was computed. Also the reference
    /// time for the activity recency adjustment.
    pub computed_at: i64,
    /// Scoring model version that produced this assessment.
    pub model_version: u16,
}

/// Contribution of one factor to an assessment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FactorAnalysis {
    pub factor: Factor,
    pub name: String,
    /// Raw factor score, `0..=100`.
    pub raw_score: f64,
    pub weight: f64,
    /// `raw_score * weight`.
    pub contribution: f64,
    pub rating: Rating,
    /// Human-readable summary of the metric behind the factor.
    pub description: String,
}

/// A ranked recommendation for raising a weak factor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    pub factor: Factor,
    pub name: String,
    /// Raw score of the factor when the suggestion was produced.
    pub current_score: f64,
    /// Bonus points gained by lifting the factor to 100.
    pub potential_gain: u16,
    pub suggestion: String,
    pub priority: Priority,
}

/// One factor line of a [`ScoreBreakdown`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub factor: Factor,
    pub name: String,
    pub raw_score: f64,
    /// Weight as a percentage (`25.0` for a 0.25 weight).
    pub weight_percent: f64,
    /// Bonus points the factor contributed, `round(raw * weight * 550 / 100)`.
    pub contribution_points: u16,
    pub rating: Rating,
}

/// Display-oriented breakdown of an assessment into score points.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: u16,
    pub factors: Vec<BreakdownEntry>,
    pub total: u16,
    pub max_possible: u16,
}
