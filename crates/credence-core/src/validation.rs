//! Metrics validation.
//!
//! [`validate_metrics`] is the single gate in front of the scoring engine.
//! It rejects out-of-range input instead of clamping it, and it runs before
//! any factor is computed so no partial result can escape.
//!
//! `subject_id` must be non-empty and start with `aleo1`; the rest of the id
//! is passed through uninterpreted. Numeric fields are then checked one at a
//! time in declaration order (count, age, engagement, reliability, balance,
//! last activity), each for finiteness first and then for its range:
//! - `activity_count`, `age_months`, `holding_balance` and
//!   `last_activity_at` are non-negative
//! - `engagement_score` and `reliability_rate` lie in `0..=100`

use crate::constants::{FACTOR_SCALE, SUBJECT_ID_PREFIX};
use crate::error::{MetricsViolation, ScoringError};
use crate::types::Metrics;

/// Validate a metrics record. Returns the first violation found.
///
/// # Examples
///
/// ```
/// use credence_core::types::Metrics;
/// use credence_core::validation::validate_metrics;
///
/// let metrics = Metrics {
///     subject_id: "aleo1qz7kf9x4p8z3".to_string(),
///     activity_count: 12,
///     age_months: 3.5,
///     engagement_score: 40.0,
///     reliability_rate: 90.0,
///     holding_balance: 2_500.0,
///     last_activity_at: 1_700_000_000_000,
/// };
/// assert!(validate_metrics(&metrics).is_ok());
///
/// let bad = Metrics { engagement_score: 101.0, ..metrics };
/// assert!(validate_metrics(&bad).is_err());
/// ```
pub fn validate_metrics(metrics: &Metrics) -> Result<(), ScoringError> {
    validate_subject_id(&metrics.subject_id)?;

    check_non_negative("activityCount", metrics.activity_count as f64)?;

    check_finite("ageMonths", metrics.age_months)?;
    check_non_negative("ageMonths", metrics.age_months)?;

    check_finite("engagementScore", metrics.engagement_score)?;
    check_percentage("engagementScore", metrics.engagement_score)?;

    check_finite("reliabilityRate", metrics.reliability_rate)?;
    check_percentage("reliabilityRate", metrics.reliability_rate)?;

    check_finite("holdingBalance", metrics.holding_balance)?;
    check_non_negative("holdingBalance", metrics.holding_balance)?;

    check_non_negative("lastActivityAt", metrics.last_activity_at as f64)?;

    Ok(())
}

/// Validate a subject identifier against the address scheme.
///
/// Only the prefix is checked; the remainder is opaque.
pub fn validate_subject_id(subject_id: &str) -> Result<(), ScoringError> {
    if subject_id.is_empty() {
        return Err(MetricsViolation::EmptySubjectId.into());
    }
    if !subject_id.starts_with(SUBJECT_ID_PREFIX) {
        return Err(MetricsViolation::MalformedSubjectId(subject_id.to_string()).into());
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MetricsViolation::NonFinite { field }.into())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if value < 0.0 {
        return Err(MetricsViolation::Negative { field, value }.into());
    }
    Ok(())
}

fn check_percentage(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if !(0.0..=FACTOR_SCALE).contains(&value) {
        return Err(MetricsViolation::OutOfRange {
            field,
            value,
            min: 0.0,
            max: FACTOR_SCALE,
        }
        .into());
    }
    Ok(())
}
