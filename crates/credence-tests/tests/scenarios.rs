//! End-to-end scoring scenarios.
//!
//! Each test scores a fixture through the public [`CreditScorer`] interface and
//! checks the assessment together with every derived analytic built from it.

use credence_core::constants::*;
use credence_core::error::{MetricsViolation, ScoringError};
use credence_core::traits::CreditScorer;
use credence_core::types::*;
use credence_score::ScoringEngine;
use credence_tests::helpers::*;

fn engine() -> ScoringEngine {
    ScoringEngine::new()
}

// ---------------------------------------------------------------------------
// Canonical regression fixture
// ---------------------------------------------------------------------------

#[test]
fn canonical_fixture_reproduces_exactly() {
    let e = engine();
    let a = e.score_at(&canonical_metrics(), NOW).unwrap();

    assert_eq!(a.base_score, BASE_SCORE);
    assert_eq!(a.bonus_points, 362);
    assert_eq!(a.final_score, 662);
    assert_eq!(a.risk_level, RiskLevel::Medium);
    assert_eq!(e.percentile(a.final_score), 73);

    let raws: Vec<f64> = e.analyze(&a).iter().map(|f| f.raw_score).collect();
    assert_eq!(raws, vec![65.0, 60.0, 50.0, 90.0, 50.0]);
}

#[test]
fn canonical_fixture_stable_across_runs() {
    let e = engine();
    let first = e.score_at(&canonical_metrics(), NOW).unwrap();
    for _ in 0..100 {
        assert_eq!(e.score_at(&canonical_metrics(), NOW).unwrap(), first);
    }
}

// ---------------------------------------------------------------------------
// Extremes
// ---------------------------------------------------------------------------

#[test]
fn maximum_profile_scores_850() {
    let e = engine();
    let a = e.score_at(&maximum_metrics(), NOW).unwrap();

    assert_eq!(a.bonus_points, BONUS_RANGE);
    assert_eq!(a.final_score, MAX_SCORE);
    assert_eq!(a.risk_level, RiskLevel::Low);
    assert!(e.suggest(&a).is_empty());
    assert!(e.analyze(&a).iter().all(|f| f.rating == Rating::Excellent));
}

#[test]
fn zero_profile_scores_300_with_reliability_first() {
    let e = engine();
    let a = e.score_at(&zero_metrics(), NOW).unwrap();

    assert_eq!(a.bonus_points, 0);
    assert_eq!(a.final_score, MIN_SCORE);
    assert_eq!(a.risk_level, RiskLevel::High);
    assert_eq!(e.percentile(a.final_score), 0);

    for f in e.analyze(&a) {
        assert_eq!(f.raw_score, 0.0, "{} not at zero", f.name);
        assert_eq!(f.rating, Rating::Poor);
    }

    let s = e.suggest(&a);
    assert_eq!(s.len(), 5);
    assert_eq!(s[0].factor, Factor::Reliability);
    assert_eq!(s[0].priority, Priority::High);
    assert_eq!(s.last().unwrap().factor, Factor::AccountAge);
    assert_eq!(s.last().unwrap().priority, Priority::Low);
}

// ---------------------------------------------------------------------------
// Recency
// ---------------------------------------------------------------------------

#[test]
fn inactivity_erodes_activity_factor() {
    let e = engine();
    let scores: Vec<u16> = [0, 20, 60, 120, 365]
        .into_iter()
        .map(|days| {
            e.score_at(&active_days_ago(canonical_metrics(), days), NOW)
                .unwrap()
                .final_score
        })
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "score rose with inactivity: {scores:?}");
    }
    assert!(scores[0] > scores[4]);
}

#[test]
fn analytics_follow_assessment_time() {
    let e = engine();
    let a = e.score_at(&canonical_metrics(), NOW).unwrap();

    // Re-deriving later must not re-judge recency against a new clock.
    let stored: Assessment = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
    assert_eq!(e.analyze(&stored), e.analyze(&a));
    assert_eq!(e.suggest(&stored), e.suggest(&a));
    assert_eq!(e.breakdown(&stored), e.breakdown(&a));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn invalid_inputs_rejected_before_scoring() {
    let e = engine();
    let cases = [
        Metrics {
            activity_count: -1,
            ..canonical_metrics()
        },
        Metrics {
            engagement_score: 101.0,
            ..canonical_metrics()
        },
        Metrics {
            reliability_rate: -1.0,
            ..canonical_metrics()
        },
        Metrics {
            subject_id: String::new(),
            ..canonical_metrics()
        },
        Metrics {
            subject_id: "0x1234".to_string(),
            ..canonical_metrics()
        },
    ];

    for m in cases {
        let err = e.score_at(&m, NOW).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidMetrics(_)), "{m:?}");
    }
}

#[test]
fn empty_subject_reason() {
    let err = engine()
        .score_at(
            &Metrics {
                subject_id: String::new(),
                ..canonical_metrics()
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(err, ScoringError::InvalidMetrics(MetricsViolation::EmptySubjectId));
    assert_eq!(err.to_string(), "invalid metrics: subject id is empty");
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

#[test]
fn breakdown_mirrors_analysis() {
    let e = engine();
    let a = e.score_at(&canonical_metrics(), NOW).unwrap();
    let analysis = e.analyze(&a);
    let b = e.breakdown(&a);

    assert_eq!(b.total, a.final_score);
    assert_eq!(b.max_possible, MAX_SCORE);
    assert_eq!(b.factors.len(), analysis.len());
    for (entry, f) in b.factors.iter().zip(&analysis) {
        assert_eq!(entry.factor, f.factor);
        assert_eq!(entry.raw_score, f.raw_score);
        assert_eq!(entry.rating, f.rating);
    }

    // Per-factor rounding keeps the sum within one point per factor.
    let points: i32 = b.factors.iter().map(|f| i32::from(f.contribution_points)).sum();
    assert!((points - i32::from(a.bonus_points)).abs() <= b.factors.len() as i32);
}

#[test]
fn assessment_json_shape() {
    let a = engine().score_at(&canonical_metrics(), NOW).unwrap();
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["finalScore"], 662);
    assert_eq!(json["riskLevel"], "medium");
    assert_eq!(json["metrics"]["activityCount"], 25);
    assert_eq!(json["computedAt"], NOW);
}
