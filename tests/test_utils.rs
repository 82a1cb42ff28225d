#![allow(dead_code)] // Each test crate uses a different subset of these helpers

use bsm_heatmap::{FixedParameters, GridRange};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Textbook at-the-money reference: S=K=100, one year, 20% vol, 5% rate.
pub const REF_SPOT: f64 = 100.0;
pub const REF_STRIKE: f64 = 100.0;
pub const REF_T: f64 = 1.0;
pub const REF_VOL: f64 = 0.2;
pub const REF_RATE: f64 = 0.05;

/// Seeded generator so randomized sweeps are reproducible
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(20_240_601)
}

pub fn reference_fixed() -> FixedParameters {
    FixedParameters {
        strike: REF_STRIKE,
        time_to_maturity: REF_T,
        risk_free_rate: REF_RATE,
    }
}

/// Spot 80..125 in steps of 5 and volatility 0.10..0.28 in steps of 0.02, so the
/// reference point (spot 100, vol 0.20) is cell [5][4].
pub fn stepped_range() -> GridRange {
    GridRange::new(80.0, 125.0, 0.10, 0.28).expect("valid range")
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} +/- {}, got {}",
        what,
        expected,
        tol,
        actual
    );
}
