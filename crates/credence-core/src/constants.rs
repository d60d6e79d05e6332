//! Scoring model constants.
//!
//! Every value in this module is part of the published scoring model. Changing
//! any of them changes the meaning of previously issued scores, so each change
//! must be accompanied by a bump of [`SCORING_MODEL_VERSION`].

/// Version of the scoring model, stamped on every assessment.
pub const SCORING_MODEL_VERSION: u16 = 2;

/// Required prefix of a subject identifier (account address).
pub const SUBJECT_ID_PREFIX: &str = "aleo1";

// ---------------------------------------------------------------------------
// Score bounds
// ---------------------------------------------------------------------------

/// Floor of the score range; every assessment starts here.
pub const BASE_SCORE: u16 = 300;

/// Lowest score an assessment can carry.
pub const MIN_SCORE: u16 = 300;

/// Highest score an assessment can carry.
pub const MAX_SCORE: u16 = 850;

/// Bonus points available on top of [`BASE_SCORE`] (`850 - 300 = 550`).
pub const BONUS_RANGE: u16 = MAX_SCORE - BASE_SCORE;

/// Upper bound of every factor's raw score and of the normalized weighted score.
pub const FACTOR_SCALE: f64 = 100.0;

/// Bonus points gained per point of weighted factor score.
///
/// Converts a 0–100 weighted factor point into the 0–550 bonus scale. It is the
/// same conversion the aggregator applies when it derives bonus points, so it
/// is derived from [`BONUS_RANGE`] rather than written out as `5.5`.
///
/// ```
/// use credence_core::constants::BONUS_PER_FACTOR_POINT;
/// assert_eq!(BONUS_PER_FACTOR_POINT, 5.5);
/// ```
pub const BONUS_PER_FACTOR_POINT: f64 = BONUS_RANGE as f64 / FACTOR_SCALE;

// ---------------------------------------------------------------------------
// Risk bands (inclusive lower bounds)
// ---------------------------------------------------------------------------

/// Lowest final score classified as low risk.
pub const LOW_RISK_MIN_SCORE: u16 = 750;

/// Lowest final score classified as medium risk.
pub const MEDIUM_RISK_MIN_SCORE: u16 = 500;

// ---------------------------------------------------------------------------
// Factor weights
// ---------------------------------------------------------------------------

/// Weight of the activity history factor.
pub const WEIGHT_ACTIVITY_HISTORY: f64 = 0.25;
/// Weight of the account age factor.
pub const WEIGHT_ACCOUNT_AGE: f64 = 0.20;
/// Weight of the engagement factor.
pub const WEIGHT_ENGAGEMENT: f64 = 0.20;
/// Weight of the reliability factor.
pub const WEIGHT_RELIABILITY: f64 = 0.25;
/// Weight of the balance stability factor.
pub const WEIGHT_BALANCE_STABILITY: f64 = 0.10;

// ---------------------------------------------------------------------------
// Ratings and suggestions
// ---------------------------------------------------------------------------

/// Raw score at or above which a factor is rated excellent.
pub const RATING_EXCELLENT_MIN: f64 = 85.0;
/// Raw score at or above which a factor is rated good.
pub const RATING_GOOD_MIN: f64 = 70.0;
/// Raw score at or above which a factor is rated fair.
pub const RATING_FAIR_MIN: f64 = 50.0;

/// Factors scoring below this raw score receive an improvement suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 70.0;

// ---------------------------------------------------------------------------
// Recency adjustment (activity history)
// ---------------------------------------------------------------------------

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Activity within this many days earns [`RECENT_ACTIVITY_BONUS`].
pub const RECENT_ACTIVITY_DAYS: f64 = 7.0;
/// Bonus for activity within [`RECENT_ACTIVITY_DAYS`].
pub const RECENT_ACTIVITY_BONUS: f64 = 10.0;

/// Activity within this many days earns [`ACTIVE_MONTH_BONUS`].
pub const ACTIVE_MONTH_DAYS: f64 = 30.0;
/// Bonus for activity within [`ACTIVE_MONTH_DAYS`].
pub const ACTIVE_MONTH_BONUS: f64 = 5.0;

/// Inactivity beyond this many days costs [`DORMANT_PENALTY`].
pub const DORMANT_DAYS: f64 = 90.0;
/// Penalty for inactivity beyond [`DORMANT_DAYS`].
pub const DORMANT_PENALTY: f64 = 15.0;

/// Inactivity beyond this many days costs an additional [`ABANDONED_PENALTY`].
pub const ABANDONED_DAYS: f64 = 180.0;
/// Additional penalty for inactivity beyond [`ABANDONED_DAYS`].
pub const ABANDONED_PENALTY: f64 = 25.0;

// ---------------------------------------------------------------------------
// Score population model (percentile estimate)
// ---------------------------------------------------------------------------

/// Mean of the modelled score population.
pub const POPULATION_MEAN: f64 = 600.0;

/// Standard deviation of the modelled score population.
pub const POPULATION_STDDEV: f64 = 100.0;
