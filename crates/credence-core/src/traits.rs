//! Trait interfaces for the scoring engine.
//!
//! [`CreditScorer`] is the contract between the data model (this crate) and
//! the engine implementation (credence-score). Downstream collaborators
//! (display, proof generation, submission) depend only on this trait.

use crate::error::ScoringError;
use crate::types::{Assessment, FactorAnalysis, ImprovementSuggestion, Metrics, ScoreBreakdown};

/// Pure, stateless credit scoring.
///
/// Only [`score_at`](Self::score_at) can fail, and only with
/// [`ScoringError::InvalidMetrics`]. Every derived analytic is a total
/// function of an existing [`Assessment`] and is recomputed on each call.
pub trait CreditScorer: Send + Sync {
    /// Validate and score `metrics` using `now_ms` as the reference time for
    /// the activity recency adjustment. The result carries `computed_at = now_ms`.
    fn score_at(&self, metrics: &Metrics, now_ms: i64) -> Result<Assessment, ScoringError>;

    /// Validate and score `metrics` against the current wall-clock time.
    ///
    /// Default implementation delegates to [`score_at`](Self::score_at).
    fn score(&self, metrics: &Metrics) -> Result<Assessment, ScoringError> {
        self.score_at(metrics, chrono::Utc::now().timestamp_millis())
    }

    /// Per-factor analysis in canonical factor order.
    fn analyze(&self, assessment: &Assessment) -> Vec<FactorAnalysis>;

    /// Improvement suggestions for weak factors, most actionable first.
    /// An empty list means no improvement is needed.
    fn suggest(&self, assessment: &Assessment) -> Vec<ImprovementSuggestion>;

    /// Score-point breakdown for display.
    fn breakdown(&self, assessment: &Assessment) -> ScoreBreakdown;

    /// Estimated percentile rank of a final score, `0..=100`.
    fn percentile(&self, final_score: u16) -> u8;
}
