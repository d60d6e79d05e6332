//! Factor scoring: ordered tier tables with diminishing returns.
//!
//! Every factor maps one metric to a raw score in `0.0..=100.0` through a
//! [`TierTable`]: tiers are sorted by descending threshold, the first tier
//! whose inclusive lower bound is met wins, and values below the lowest tier
//! fall through to a linear [`Fallback`]. Tables plateau at 100 so very
//! active, old or reliable accounts level off instead of growing unbounded.
//!
//! | Factor            | Weight | Metric             |
//! |-------------------|--------|--------------------|
//! | Activity history  | 0.25   | `activity_count` (+ recency) |
//! | Account age       | 0.20   | `age_months`       |
//! | Engagement        | 0.20   | `engagement_score` |
//! | Reliability       | 0.25   | `reliability_rate` |
//! | Balance stability | 0.10   | `holding_balance`  |

use credence_core::constants::{
    ABANDONED_DAYS, ABANDONED_PENALTY, ACTIVE_MONTH_BONUS, ACTIVE_MONTH_DAYS, DORMANT_DAYS,
    DORMANT_PENALTY, FACTOR_SCALE, MS_PER_DAY, RECENT_ACTIVITY_BONUS, RECENT_ACTIVITY_DAYS,
};
use credence_core::types::{Factor, Metrics};

/// A single tier: values at or above `min` score `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub min: f64,
    pub score: f64,
}

/// Linear mapping applied below the lowest tier.
///
/// Multiplication and division are kept distinct so that `balance / 25` is not
/// silently replaced by `balance * 0.04`, which rounds differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    Multiply(f64),
    Divide(f64),
}

impl Fallback {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Fallback::Multiply(n) => value * n,
            Fallback::Divide(n) => value / n,
        }
    }
}

/// Tiers sorted by descending `min`, plus the fallback below the last tier.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    pub tiers: &'static [Tier],
    pub below: Fallback,
}

impl TierTable {
    /// Score of the first tier whose lower bound `value` meets, or the
    /// fallback when no tier matches.
    pub fn score(&self, value: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| value >= tier.min)
            .map(|tier| tier.score)
            .unwrap_or_else(|| self.below.apply(value))
    }
}

const fn tier(min: f64, score: f64) -> Tier {
    Tier { min, score }
}

/// Action count tiers (before the recency adjustment).
pub const ACTIVITY_TABLE: TierTable = TierTable {
    tiers: &[
        tier(200.0, 100.0),
        tier(100.0, 85.0),
        tier(50.0, 70.0),
        tier(25.0, 55.0),
        tier(10.0, 40.0),
        tier(5.0, 25.0),
    ],
    below: Fallback::Multiply(5.0),
};

/// Account age tiers, in months.
pub const ACCOUNT_AGE_TABLE: TierTable = TierTable {
    tiers: &[
        tier(24.0, 100.0),
        tier(18.0, 90.0),
        tier(12.0, 80.0),
        tier(6.0, 60.0),
        tier(3.0, 40.0),
        tier(1.0, 20.0),
    ],
    below: Fallback::Multiply(20.0),
};

/// Engagement remap.
pub const ENGAGEMENT_TABLE: TierTable = TierTable {
    tiers: &[
        tier(80.0, 100.0),
        tier(60.0, 85.0),
        tier(40.0, 70.0),
        tier(20.0, 50.0),
    ],
    below: Fallback::Multiply(2.0),
};

/// Reliability remap. Below 60% the penalty is harsher than linear.
pub const RELIABILITY_TABLE: TierTable = TierTable {
    tiers: &[
        tier(95.0, 100.0),
        tier(90.0, 95.0),
        tier(85.0, 90.0),
        tier(80.0, 85.0),
        tier(75.0, 75.0),
        tier(70.0, 65.0),
        tier(60.0, 50.0),
    ],
    below: Fallback::Multiply(0.7),
};

/// Holding balance tiers.
pub const BALANCE_TABLE: TierTable = TierTable {
    tiers: &[
        tier(1_000_000.0, 100.0),
        tier(500_000.0, 90.0),
        tier(100_000.0, 80.0),
        tier(50_000.0, 70.0),
        tier(10_000.0, 60.0),
        tier(5_000.0, 50.0),
        tier(1_000.0, 40.0),
    ],
    below: Fallback::Divide(25.0),
};

/// One factor's raw score together with its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    pub factor: Factor,
    /// Raw score, `0.0..=100.0`.
    pub raw_score: f64,
    pub weight: f64,
    /// `raw_score * weight`.
    pub contribution: f64,
}

impl FactorScore {
    fn new(factor: Factor, raw_score: f64) -> Self {
        let weight = factor.weight();
        Self {
            factor,
            raw_score,
            weight,
            contribution: raw_score * weight,
        }
    }
}

/// Days elapsed between `last_activity_at` and `now_ms`.
///
/// Negative when the last activity lies after the reference time.
pub fn days_since(last_activity_at: i64, now_ms: i64) -> f64 {
    now_ms.saturating_sub(last_activity_at) as f64 / MS_PER_DAY
}

/// Recency adjustment for the activity history factor.
///
/// Bonuses and penalties are cumulative; the caller clamps the adjusted score.
pub fn recency_adjustment(days: f64) -> f64 {
    let mut adjustment = 0.0;
    if days <= RECENT_ACTIVITY_DAYS {
        adjustment += RECENT_ACTIVITY_BONUS;
    } else if days <= ACTIVE_MONTH_DAYS {
        adjustment += ACTIVE_MONTH_BONUS;
    }

    if days > DORMANT_DAYS {
        adjustment -= DORMANT_PENALTY;
    }
    if days > ABANDONED_DAYS {
        adjustment -= ABANDONED_PENALTY;
    }
    adjustment
}

/// Activity history: action count tiers plus recency, clamped once at the end.
pub fn activity_history_score(metrics: &Metrics, now_ms: i64) -> f64 {
    let base = ACTIVITY_TABLE.score(metrics.activity_count as f64);
    let days = days_since(metrics.last_activity_at, now_ms);
    (base + recency_adjustment(days)).clamp(0.0, FACTOR_SCALE)
}

pub fn account_age_score(metrics: &Metrics) -> f64 {
    ACCOUNT_AGE_TABLE.score(metrics.age_months).min(FACTOR_SCALE)
}

pub fn engagement_score(metrics: &Metrics) -> f64 {
    ENGAGEMENT_TABLE.score(metrics.engagement_score)
}

pub fn reliability_score(metrics: &Metrics) -> f64 {
    RELIABILITY_TABLE.score(metrics.reliability_rate)
}

pub fn balance_stability_score(metrics: &Metrics) -> f64 {
    BALANCE_TABLE.score(metrics.holding_balance).min(FACTOR_SCALE)
}

/// Raw score of a single factor.
pub fn raw_score(factor: Factor, metrics: &Metrics, now_ms: i64) -> f64 {
    match factor {
        Factor::ActivityHistory => activity_history_score(metrics, now_ms),
        Factor::AccountAge => account_age_score(metrics),
        Factor::Engagement => engagement_score(metrics),
        Factor::Reliability => reliability_score(metrics),
        Factor::BalanceStability => balance_stability_score(metrics),
    }
}

/// All five factor scores in canonical order.
///
/// Expects metrics that already passed validation.
pub fn factor_scores(metrics: &Metrics, now_ms: i64) -> [FactorScore; 5] {
    Factor::ALL.map(|factor| FactorScore::new(factor, raw_score(factor, metrics, now_ms)))
}
