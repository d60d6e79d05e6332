//! Error types for the scoring engine.
use thiserror::Error;

/// The specific rule a [`Metrics`](crate::types::Metrics) record broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsViolation {
    #[error("subject id is empty")] EmptySubjectId,
    #[error("subject id {0:?} does not match the address format")] MalformedSubjectId(String),
    #[error("{field} cannot be negative (got {value})")] Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")] NonFinite { field: &'static str },
    #[error("{field} must be between {min} and {max} (got {value})")] OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
}

/// The only error the scoring engine produces.
///
/// Raised by the validator before any factor is computed; no partial
/// assessment is ever returned alongside it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("invalid metrics: {0}")] InvalidMetrics(#[from] MetricsViolation),
}
