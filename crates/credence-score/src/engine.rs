//! Scoring engine implementing the [`CreditScorer`] trait.
//!
//! Validates metrics, computes the five factor scores, aggregates them into
//! bonus points on top of the base score and classifies the risk level.
//! Derived analytics are delegated to [`crate::analysis`],
//! [`crate::suggestions`] and [`crate::percentile`].

use credence_core::constants::{
    BASE_SCORE, BONUS_RANGE, FACTOR_SCALE, MAX_SCORE, MIN_SCORE, SCORING_MODEL_VERSION,
};
use credence_core::error::ScoringError;
use credence_core::traits::CreditScorer;
use credence_core::types::{
    Assessment, FactorAnalysis, ImprovementSuggestion, Metrics, RiskLevel, ScoreBreakdown,
};
use credence_core::validation::validate_metrics;
use tracing::debug;

use crate::factors::{factor_scores, FactorScore};
use crate::{analysis, percentile, suggestions};

/// The production credit scorer.
///
/// Stateless: a zero-sized value that can be copied freely and shared across
/// threads without synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Create a new ScoringEngine.
    pub fn new() -> Self {
        Self
    }
}

/// Weighted factor score on the `0..=100` scale.
///
/// Each weight is scaled by 100 before it multiplies its raw score and the sum
/// is divided by 100 afterwards; summation follows canonical factor order.
pub fn normalized_score(scores: &[FactorScore]) -> f64 {
    let weighted_sum: f64 = scores
        .iter()
        .map(|s| s.raw_score * (s.weight * FACTOR_SCALE))
        .sum();
    weighted_sum / FACTOR_SCALE
}

/// Bonus points for a normalized score: `round(normalized / 100 * 550)`.
pub fn bonus_points(normalized: f64) -> u16 {
    let bonus = (normalized / FACTOR_SCALE * f64::from(BONUS_RANGE)).round();
    bonus.clamp(0.0, f64::from(BONUS_RANGE)) as u16
}

/// Final score: `clamp(base + bonus, 300, 850)`.
pub fn final_score(bonus_points: u16) -> u16 {
    BASE_SCORE
        .saturating_add(bonus_points)
        .clamp(MIN_SCORE, MAX_SCORE)
}

impl CreditScorer for ScoringEngine {
    fn score_at(&self, metrics: &Metrics, now_ms: i64) -> Result<Assessment, ScoringError> {
        if let Err(e) = validate_metrics(metrics) {
            debug!(subject = %metrics.subject_id, "rejected metrics: {}", e);
            return Err(e);
        }

        let scores = factor_scores(metrics, now_ms);
        let normalized = normalized_score(&scores);
        let bonus = bonus_points(normalized);
        let final_score = final_score(bonus);
        let risk_level = RiskLevel::from_score(final_score);

        debug!(
            subject = %metrics.subject_id,
            activity = scores[0].raw_score,
            age = scores[1].raw_score,
            engagement = scores[2].raw_score,
            reliability = scores[3].raw_score,
            balance = scores[4].raw_score,
            normalized,
            bonus,
            final_score,
            %risk_level,
            "scored metrics"
        );

        Ok(Assessment {
            subject_id: metrics.subject_id.clone(),
            metrics: metrics.clone(),
            base_score: BASE_SCORE,
            bonus_points: bonus,
            final_score,
            risk_level,
            computed_at: now_ms,
            model_version: SCORING_MODEL_VERSION,
        })
    }

    fn analyze(&self, assessment: &Assessment) -> Vec<FactorAnalysis> {
        analysis::analyze(assessment)
    }

    fn suggest(&self, assessment: &Assessment) -> Vec<ImprovementSuggestion> {
        suggestions::suggest(assessment)
    }

    fn breakdown(&self, assessment: &Assessment) -> ScoreBreakdown {
        analysis::breakdown(assessment)
    }

    fn percentile(&self, final_score: u16) -> u8 {
        percentile::percentile(final_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credence_core::error::MetricsViolation;
    use credence_core::types::Factor;
    use proptest::prelude::*;

    const NOW: i64 = 1_750_000_000_000;

    fn engine() -> ScoringEngine {
        ScoringEngine::new()
    }

    fn canonical() -> Metrics {
        Metrics {
            subject_id: "aleo1qz7kf9x4p8z3r2m5n6v7b8c9d0e1f2g3h4j5k6".to_string(),
            activity_count: 25,
            age_months: 8.0,
            engagement_score: 35.0,
            reliability_rate: 85.0,
            holding_balance: 5_000.0,
            last_activity_at: NOW,
        }
    }

    // --- aggregation ---

    #[test]
    fn canonical_fixture() {
        let a = engine().score_at(&canonical(), NOW).unwrap();
        assert_eq!(a.base_score, 300);
        assert_eq!(a.bonus_points, 362);
        assert_eq!(a.final_score, 662);
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert_eq!(a.computed_at, NOW);
        assert_eq!(a.subject_id, canonical().subject_id);
        assert_eq!(a.metrics, canonical());
        assert_eq!(a.model_version, SCORING_MODEL_VERSION);
    }

    #[test]
    fn canonical_normalized_score() {
        let scores = factor_scores(&canonical(), NOW);
        assert_eq!(normalized_score(&scores), 65.75);
    }

    #[test]
    fn bonus_points_bounds() {
        assert_eq!(bonus_points(0.0), 0);
        assert_eq!(bonus_points(100.0), 550);
        assert_eq!(bonus_points(50.0), 275);
        assert_eq!(bonus_points(65.75), 362);
    }

    #[test]
    fn final_score_clamped() {
        assert_eq!(final_score(0), 300);
        assert_eq!(final_score(550), 850);
        assert_eq!(final_score(600), 850);
        assert_eq!(final_score(u16::MAX), 850);
    }

    #[test]
    fn invalid_metrics_propagated_unchanged() {
        let m = Metrics {
            engagement_score: 101.0,
            ..canonical()
        };
        let err = engine().score_at(&m, NOW).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidMetrics(MetricsViolation::OutOfRange {
                field: "engagementScore",
                value: 101.0,
                min: 0.0,
                max: 100.0,
            })
        );
    }

    #[test]
    fn score_uses_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        let a = engine().score(&canonical()).unwrap();
        let after = chrono::Utc::now().timestamp_millis();
        assert!(a.computed_at >= before && a.computed_at <= after);
    }

    #[test]
    fn dormant_account_scores_lower() {
        let fresh = engine().score_at(&canonical(), NOW).unwrap();
        let dormant = engine()
            .score_at(&canonical(), NOW + 200 * 86_400_000)
            .unwrap();
        assert!(dormant.final_score < fresh.final_score);
    }

    // --- logging ---

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejection_logged_at_debug_not_warn() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer({
                let captured = captured.clone();
                move || captured.clone()
            })
            .finish();

        let bad = Metrics {
            holding_balance: -1.0,
            ..canonical()
        };
        let result = tracing::subscriber::with_default(subscriber, || engine().score_at(&bad, NOW));
        assert!(result.is_err());

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("rejected metrics"), "{logs}");
        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(!logs.contains("WARN"), "{logs}");
    }

    // --- trait delegation ---

    #[test]
    fn engine_is_object_safe() {
        let e = engine();
        let dyn_e: &dyn CreditScorer = &e;
        let a = dyn_e.score_at(&canonical(), NOW).unwrap();
        assert_eq!(dyn_e.analyze(&a).len(), Factor::ALL.len());
        assert_eq!(dyn_e.percentile(a.final_score), 73);
    }

    #[test]
    fn breakdown_total_matches_assessment() {
        let e = engine();
        let a = e.score_at(&canonical(), NOW).unwrap();
        let b = e.breakdown(&a);
        assert_eq!(b.total, a.final_score);
        assert_eq!(b.base, a.base_score);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn score_always_in_bounds(
            count in 0i64..10_000,
            age in 0.0f64..240.0,
            engagement in 0.0f64..=100.0,
            reliability in 0.0f64..=100.0,
            balance in 0.0f64..1.0e8,
            days_ago in 0i64..3_650,
        ) {
            let m = Metrics {
                activity_count: count,
                age_months: age,
                engagement_score: engagement,
                reliability_rate: reliability,
                holding_balance: balance,
                last_activity_at: NOW - days_ago * 86_400_000,
                ..canonical()
            };
            let a = engine().score_at(&m, NOW).unwrap();
            prop_assert!((300..=850).contains(&a.final_score), "final {}", a.final_score);
            prop_assert!(a.bonus_points <= 550, "bonus {}", a.bonus_points);
            prop_assert_eq!(a.final_score, a.base_score + a.bonus_points);
            prop_assert_eq!(a.risk_level, RiskLevel::from_score(a.final_score));
        }

        #[test]
        fn scoring_deterministic(
            count in 0i64..1_000,
            reliability in 0.0f64..=100.0,
        ) {
            let m = Metrics { activity_count: count, reliability_rate: reliability, ..canonical() };
            let a1 = engine().score_at(&m, NOW).unwrap();
            let a2 = engine().score_at(&m, NOW).unwrap();
            prop_assert_eq!(a1, a2);
        }

        #[test]
        fn more_reliability_never_lowers_score(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let s_lo = engine().score_at(&Metrics { reliability_rate: lo, ..canonical() }, NOW).unwrap();
            let s_hi = engine().score_at(&Metrics { reliability_rate: hi, ..canonical() }, NOW).unwrap();
            prop_assert!(s_lo.final_score <= s_hi.final_score);
        }
    }
}
