//! Percentile estimate of a final score.
//!
//! The score population is modelled as `Normal(600, 100)`. The rank is
//! `50 * (1 + erf(z / sqrt(2)))` with `z = (score - 600) / 100`, rounded and
//! clamped to `0..=100`.
//!
//! `erf` is evaluated with the Abramowitz–Stegun 7.1.26 rational
//! approximation (maximum absolute error 1.5e-7). The coefficients are pinned:
//! a platform `erf` would change previously reported percentiles.

use credence_core::constants::{POPULATION_MEAN, POPULATION_STDDEV};

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Abramowitz–Stegun approximation of the error function.
///
/// Odd by construction: `erf(-x) == -erf(x)`. Note `erf(0)` evaluates to
/// about `1e-9`, not exactly zero, because the coefficients sum to
/// `0.999999999`.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Estimated percentile rank of `score` among all scored accounts.
///
/// # Examples
///
/// ```
/// use credence_score::percentile::percentile;
///
/// assert_eq!(percentile(600), 50);
/// assert_eq!(percentile(300), 0);
/// assert_eq!(percentile(850), 99);
/// ```
pub fn percentile(score: u16) -> u8 {
    let z = (f64::from(score) - POPULATION_MEAN) / POPULATION_STDDEV;
    let rank = 50.0 * (1.0 + erf(z / std::f64::consts::SQRT_2));
    rank.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn erf_reference_points() {
        // Reference values from the exact error function; A&S error <= 1.5e-7.
        assert!((erf(0.5) - 0.520_499_877_8).abs() < 2e-7);
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 2e-7);
        assert!((erf(2.0) - 0.995_322_265_0).abs() < 2e-7);
        assert!((erf(3.0) - 0.999_977_909_5).abs() < 2e-7);
    }

    #[test]
    fn erf_is_odd() {
        for x in [0.1, 0.5, 1.0, 1.7, 3.2] {
            assert_eq!(erf(-x), -erf(x));
        }
    }

    #[test]
    fn erf_at_zero_is_pinned() {
        // 1 - (a1 + a2 + a3 + a4 + a5) with the pinned coefficients.
        assert!((erf(0.0) - 1e-9).abs() < 1e-15);
    }

    #[test]
    fn percentile_at_mean() {
        assert_eq!(percentile(600), 50);
    }

    #[test]
    fn percentile_at_score_bounds() {
        assert_eq!(percentile(300), 0);
        assert_eq!(percentile(850), 99);
        assert_eq!(percentile(0), 0);
        assert_eq!(percentile(u16::MAX), 100);
    }

    #[test]
    fn percentile_known_points() {
        assert_eq!(percentile(500), 16);
        assert_eq!(percentile(662), 73);
        assert_eq!(percentile(700), 84);
        assert_eq!(percentile(750), 93);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn percentile_monotonic(a in 0u16..=1_200, b in 0u16..=1_200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                percentile(lo) <= percentile(hi),
                "percentile not monotonic: p({}) = {} > p({}) = {}",
                lo, percentile(lo), hi, percentile(hi)
            );
        }

        #[test]
        fn percentile_bounded(score in any::<u16>()) {
            prop_assert!(percentile(score) <= 100);
        }

        #[test]
        fn erf_bounded(x in -10.0f64..10.0) {
            let y = erf(x);
            prop_assert!((-1.0..=1.0).contains(&y));
        }
    }
}
