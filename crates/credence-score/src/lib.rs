//! # credence-score — Explainable credit scoring engine.
//!
//! Pure, deterministic computation with no I/O and no shared state:
//! - **Factor tier tables**: five metrics mapped to raw scores in `0..=100`
//!   through ordered tier tables with diminishing returns.
//! - **Aggregation**: weighted factor sum converted into 0–550 bonus points on
//!   top of a 300 base, giving a final score in `300..=850` and a risk level.
//! - **Analytics**: per-factor analysis, score-point breakdown and ranked
//!   improvement suggestions, recomputed on demand from an assessment.
//! - **Percentile**: normal-population rank using a pinned
//!   Abramowitz–Stegun error function.

pub mod analysis;
pub mod engine;
pub mod factors;
pub mod percentile;
pub mod suggestions;

pub use analysis::{analyze, breakdown};
pub use engine::ScoringEngine;
pub use percentile::percentile;
pub use suggestions::suggest;
