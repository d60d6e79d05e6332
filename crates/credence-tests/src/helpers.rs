//! Shared test helpers for scenario and property tests.

use credence_core::types::Metrics;

/// Fixed reference time (epoch ms) used as "now" across tests.
pub const NOW: i64 = 1_750_000_000_000;

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// A well-formed subject id.
pub fn subject(seed: u32) -> String {
    format!("aleo1qz7kf9x4p8z3r2m5n6v7b8c9d0e1f2g3h4j5k{seed}")
}

/// The canonical regression fixture: 25 actions, 8 months, 35 engagement,
/// 85% reliability, 5,000 balance, active now.
pub fn canonical_metrics() -> Metrics {
    Metrics {
        subject_id: subject(6),
        activity_count: 25,
        age_months: 8.0,
        engagement_score: 35.0,
        reliability_rate: 85.0,
        holding_balance: 5_000.0,
        last_activity_at: NOW,
    }
}

/// Every factor at its top tier.
pub fn maximum_metrics() -> Metrics {
    Metrics {
        subject_id: subject(1),
        activity_count: 200,
        age_months: 24.0,
        engagement_score: 100.0,
        reliability_rate: 100.0,
        holding_balance: 1_000_000.0,
        last_activity_at: NOW,
    }
}

/// Every factor at zero, last active at the epoch.
pub fn zero_metrics() -> Metrics {
    Metrics {
        subject_id: subject(0),
        activity_count: 0,
        age_months: 0.0,
        engagement_score: 0.0,
        reliability_rate: 0.0,
        holding_balance: 0.0,
        last_activity_at: 0,
    }
}

/// Metrics whose last activity was `days` days before [`NOW`].
pub fn active_days_ago(metrics: Metrics, days: i64) -> Metrics {
    Metrics {
        last_activity_at: NOW - days * DAY_MS,
        ..metrics
    }
}
