// Closed-form Black-Scholes pricing for European calls and puts on a non-dividend
// paying underlying. Implied volatility and Greeks are out of scope for this crate.

use std::f64::consts::SQRT_2;

use crate::error::{PricingError, Result};

/// Standard normal cumulative distribution function.
///
/// Evaluated as `½·erfc(-x/√2)` so that the lower tail keeps full relative precision
/// instead of cancelling against `1.0`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// The five market inputs of a single Black-Scholes valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParameters {
    /// Current price of the underlying
    pub spot: f64,
    /// Exercise price
    pub strike: f64,
    /// Time to maturity in years
    pub time_to_maturity: f64,
    /// Annualized volatility (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
    /// Annualized continuously compounded risk-free rate
    pub risk_free_rate: f64,
}

/// Call and put value produced by one pricer evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

impl OptionPrices {
    /// Both prices rounded for display. Never feed the result back into pricing.
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            call: crate::models::utils::round_to_decimals(self.call, decimals),
            put: crate::models::utils::round_to_decimals(self.put, decimals),
        }
    }
}

pub(crate) fn validate_strike(strike: f64) -> Result<()> {
    if strike <= 0.0 || !strike.is_finite() {
        return Err(PricingError::parameter("strike", strike, "must be > 0 and finite"));
    }
    Ok(())
}

pub(crate) fn validate_time_to_maturity(t: f64) -> Result<()> {
    if t < 0.0 || !t.is_finite() {
        return Err(PricingError::parameter("time_to_maturity", t, "must be >= 0 and finite"));
    }
    Ok(())
}

pub(crate) fn validate_risk_free_rate(r: f64) -> Result<()> {
    if !r.is_finite() {
        return Err(PricingError::parameter("risk_free_rate", r, "must be finite"));
    }
    Ok(())
}

fn validate_inputs(spot: f64, strike: f64, t: f64, vol: f64, r: f64) -> Result<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(PricingError::parameter("spot", spot, "must be > 0 and finite"));
    }
    validate_strike(strike)?;
    validate_time_to_maturity(t)?;
    if vol < 0.0 || !vol.is_finite() {
        return Err(PricingError::parameter("volatility", vol, "must be >= 0 and finite"));
    }
    validate_risk_free_rate(r)
}

impl PricingParameters {
    /// Creates a validated parameter set.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            time_to_maturity,
            volatility,
            risk_free_rate,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        validate_inputs(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.volatility,
            self.risk_free_rate,
        )
    }

    /// True when the closed form is undefined and a limiting payoff is used instead.
    pub fn is_degenerate(&self) -> bool {
        self.time_to_maturity == 0.0 || self.volatility == 0.0
    }

    /// Prices the call and put for this parameter set.
    pub fn price(&self) -> Result<OptionPrices> {
        self.validate()?;
        closed_form(self)
    }
}

/// Prices a European call and put under Black-Scholes.
///
/// # Degenerate inputs
///
/// * `time_to_maturity == 0`: intrinsic value, `max(S-K, 0)` and `max(K-S, 0)`.
/// * `volatility == 0`: the deterministic forward payoff discounted,
///   `max(S - K·e^{-rt}, 0)` and `max(K·e^{-rt} - S, 0)`.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] when spot or strike is non-positive, volatility or
/// time is negative, or any input is not finite. Finite inputs whose prices leave the
/// `f64` range (e.g. `K·e^{-rt}` overflowing) are reported under the name `price`.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::models::bs::price;
///
/// let prices = price(100.0, 100.0, 1.0, 0.2, 0.05)?;
/// assert!((prices.call - 10.45).abs() < 0.01);
/// assert!((prices.put - 5.57).abs() < 0.01);
/// # Ok::<(), bsm_heatmap::PricingError>(())
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    volatility: f64,
    risk_free_rate: f64,
) -> Result<OptionPrices> {
    PricingParameters::new(spot, strike, time_to_maturity, volatility, risk_free_rate)
        .and_then(|params| closed_form(&params))
}

/// Evaluates the formula for inputs that already passed validation.
fn closed_form(p: &PricingParameters) -> Result<OptionPrices> {
    let (s, k, t, sigma, r) = (
        p.spot,
        p.strike,
        p.time_to_maturity,
        p.volatility,
        p.risk_free_rate,
    );

    if t == 0.0 {
        return Ok(OptionPrices {
            call: (s - k).max(0.0),
            put: (k - s).max(0.0),
        });
    }

    let discounted_strike = k * (-r * t).exp();

    if sigma == 0.0 {
        return clamped(s - discounted_strike, discounted_strike - s);
    }

    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let call = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1);

    clamped(call, put)
}

/// Floors both legs at zero once they are known to be finite.
///
/// `f64::max` would silently map a NaN to `0.0`, so non-finite results are rejected first.
fn clamped(call: f64, put: f64) -> Result<OptionPrices> {
    for value in [call, put] {
        if !value.is_finite() {
            return Err(PricingError::parameter("price", value, "not finite for these inputs"));
        }
    }
    // Cancellation deep out of the money can leave a tiny negative residue.
    Ok(OptionPrices {
        call: call.max(0.0),
        put: put.max(0.0),
    })
}
