mod test_utils;

use bsm_heatmap::{norm_cdf, price, PricingError, PricingParameters};
use rand::Rng;
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::*;

/// Standard reference values for the at-the-money one-year option.
#[test]
fn test_reference_atm_prices() {
    let p = price(REF_SPOT, REF_STRIKE, REF_T, REF_VOL, REF_RATE).unwrap();
    assert_close(p.call, 10.45, 0.01, "ATM call");
    assert_close(p.put, 5.57, 0.01, "ATM put");

    // Tighter check against the closed form evaluated independently
    assert_close(p.call, 10.450_583_572_185_565, 1e-9, "ATM call (precise)");
    assert_close(p.put, 5.573_526_022_256_971, 1e-9, "ATM put (precise)");
}

/// Deep out-of-the-money call is near zero, the put is close to the discounted strike
/// minus spot.
#[test]
fn test_deep_otm_call() {
    let p = price(50.0, 100.0, 1.0, 0.2, 0.05).unwrap();
    assert!(p.call >= 0.0 && p.call <= 0.05, "call={}", p.call);
    assert!(p.put >= 45.0 && p.put <= 46.0, "put={}", p.put);
    assert_close(p.call, 0.002_399_417_553_309_663, 1e-9, "OTM call (precise)");
}

/// call - put == S - K·e^{-rt} across random inputs, degenerate ones included.
#[test]
fn test_put_call_parity_random_sweep() {
    let mut rng = test_rng();

    for i in 0..2000 {
        let s = rng.gen_range(1.0..500.0);
        let k = rng.gen_range(1.0..500.0);
        let t = if i % 50 == 0 { 0.0 } else { rng.gen_range(0.0..5.0) };
        let v = if i % 37 == 0 { 0.0 } else { rng.gen_range(0.0..2.0) };
        let r = rng.gen_range(-0.05..0.2);

        let p = price(s, k, t, v, r).unwrap();
        let parity = s - k * (-r * t).exp();
        assert!(
            (p.call - p.put - parity).abs() < 1e-6,
            "parity violated for S={} K={} t={} v={} r={}: call={} put={}",
            s,
            k,
            t,
            v,
            r,
            p.call,
            p.put
        );
        assert!(p.call >= 0.0 && p.put >= 0.0);
    }
}

/// Call never decreases and put never increases as spot rises.
#[test]
fn test_monotonic_in_spot() {
    let mut rng = test_rng();

    for _ in 0..50 {
        let k = rng.gen_range(50.0..150.0);
        let t = rng.gen_range(0.01..3.0);
        let v = rng.gen_range(0.01..1.0);
        let r = rng.gen_range(0.0..0.1);

        let mut prev = price(1.0, k, t, v, r).unwrap();
        for step in 1..300 {
            let s = 1.0 + step as f64;
            let p = price(s, k, t, v, r).unwrap();
            assert!(p.call >= prev.call - 1e-9, "call fell at S={}", s);
            assert!(p.put <= prev.put + 1e-9, "put rose at S={}", s);
            prev = p;
        }
    }
}

/// As volatility shrinks the prices approach the discounted forward payoffs.
#[test]
fn test_small_volatility_limit() {
    let cases: [(f64, f64, f64, f64); 4] = [
        (100.0, 100.0, 1.0, 0.05),
        (90.0, 100.0, 2.0, 0.03),
        (120.0, 100.0, 0.5, 0.0),
        (80.0, 100.0, 1.0, 0.01),
    ];

    for (s, k, t, r) in cases {
        let df_k = k * (-r * t).exp();
        let limit_call = (s - df_k).max(0.0);
        let limit_put = (df_k - s).max(0.0);

        let tiny = price(s, k, t, 1e-8, r).unwrap();
        assert_close(tiny.call, limit_call, 1e-6, "call at vol=1e-8");
        assert_close(tiny.put, limit_put, 1e-6, "put at vol=1e-8");

        let zero = price(s, k, t, 0.0, r).unwrap();
        assert_close(zero.call, limit_call, 1e-12, "call at vol=0");
        assert_close(zero.put, limit_put, 1e-12, "put at vol=0");
    }
}

/// Zero time to maturity prices at intrinsic value whatever the volatility.
#[test]
fn test_zero_maturity_intrinsic() {
    for v in [0.0, 0.2, 1.5] {
        let itm_call = price(105.0, 100.0, 0.0, v, 0.05).unwrap();
        assert_eq!(itm_call.call, 5.0);
        assert_eq!(itm_call.put, 0.0);

        let itm_put = price(95.0, 100.0, 0.0, v, 0.05).unwrap();
        assert_eq!(itm_put.call, 0.0);
        assert_eq!(itm_put.put, 5.0);
    }
}

/// The CDF agrees with statrs' normal distribution to well under 1e-8 on [-10, 10].
#[test]
fn test_norm_cdf_against_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in -1000..=1000 {
        let x = i as f64 * 0.01;
        assert_close(norm_cdf(x), normal.cdf(x), 1e-10, "norm_cdf");
    }
}

/// Identical inputs give bit-identical outputs.
#[test]
fn test_pricing_is_deterministic() {
    let a = price(87.3, 101.2, 0.73, 0.41, 0.027).unwrap();
    let b = price(87.3, 101.2, 0.73, 0.41, 0.027).unwrap();
    assert_eq!(a.call.to_bits(), b.call.to_bits());
    assert_eq!(a.put.to_bits(), b.put.to_bits());

    let params = PricingParameters::new(87.3, 101.2, 0.73, 0.41, 0.027).unwrap();
    assert_eq!(params.price().unwrap(), a);
}

/// Non-positive spot or strike and negative volatility are rejected.
#[test]
fn test_invalid_parameters() {
    assert!(matches!(
        price(0.0, 100.0, 1.0, 0.2, 0.05),
        Err(PricingError::InvalidParameter { name: "spot", .. })
    ));
    assert!(matches!(
        price(100.0, -100.0, 1.0, 0.2, 0.05),
        Err(PricingError::InvalidParameter { name: "strike", .. })
    ));
    assert!(matches!(
        price(100.0, 100.0, 1.0, -0.01, 0.05),
        Err(PricingError::InvalidParameter {
            name: "volatility",
            ..
        })
    ));
    assert!(PricingParameters::new(100.0, 100.0, f64::NAN, 0.2, 0.05).is_err());
}
