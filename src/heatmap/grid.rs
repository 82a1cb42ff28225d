//! Spot/volatility sensitivity sweep.
//!
//! Samples ten spots and ten volatilities, prices every combination with the fixed
//! strike, maturity and rate, and lays the results out as `[volatility][spot]`
//! matrices ready for a heatmap.

use tracing::{debug, warn};

use super::types::*;
use crate::error::Result;
use crate::models::bs::price;
use crate::models::utils::linspace;

/// Builds the call and put heatmaps with the default [`VolatilitySampling::Unrounded`]
/// policy.
///
/// # Errors
///
/// * [`crate::PricingError::InvalidRange`] if the range fails [`GridRange::validate`]
/// * [`crate::PricingError::InvalidParameter`] if the fixed parameters are out of domain
///
/// Both checks run before any cell is priced; no partial grid is ever returned.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{build_grid, FixedParameters, GridRange, GRID_SIZE};
///
/// let range = GridRange::new(80.0, 120.0, 0.1, 0.3)?;
/// let fixed = FixedParameters { strike: 100.0, time_to_maturity: 1.0, risk_free_rate: 0.05 };
/// let grid = build_grid(&range, &fixed)?;
///
/// assert_eq!(grid.spot_samples[0], 80.0);
/// assert_eq!(grid.spot_samples[GRID_SIZE - 1], 120.0);
/// # Ok::<(), bsm_heatmap::PricingError>(())
/// ```
pub fn build_grid(range: &GridRange, fixed: &FixedParameters) -> Result<SensitivityGrid> {
    build_grid_with_sampling(range, fixed, VolatilitySampling::default())
}

/// Builds the call and put heatmaps under an explicit volatility sampling policy.
pub fn build_grid_with_sampling(
    range: &GridRange,
    fixed: &FixedParameters,
    sampling: VolatilitySampling,
) -> Result<SensitivityGrid> {
    range.validate()?;
    fixed.validate()?;

    debug!(
        min_spot = range.min_spot,
        max_spot = range.max_spot,
        min_volatility = range.min_volatility,
        max_volatility = range.max_volatility,
        ?sampling,
        "building sensitivity grid"
    );
    if fixed.time_to_maturity == 0.0 {
        warn!("time to maturity is zero; every cell is priced at intrinsic value");
    }

    let spot_samples = linspace::<GRID_SIZE>(range.min_spot, range.max_spot)
        .map(round_axis);

    let raw_volatility = linspace::<GRID_SIZE>(range.min_volatility, range.max_volatility);
    let volatility_samples = match sampling {
        VolatilitySampling::Unrounded => raw_volatility,
        VolatilitySampling::Rounded => raw_volatility.map(round_axis),
    };

    let mut call_matrix: PriceMatrix = [[0.0; GRID_SIZE]; GRID_SIZE];
    let mut put_matrix: PriceMatrix = [[0.0; GRID_SIZE]; GRID_SIZE];

    for (i, &volatility) in volatility_samples.iter().enumerate() {
        for (j, &spot) in spot_samples.iter().enumerate() {
            let prices = price(
                spot,
                fixed.strike,
                fixed.time_to_maturity,
                volatility,
                fixed.risk_free_rate,
            )?;
            call_matrix[i][j] = prices.call;
            put_matrix[i][j] = prices.put;
        }
    }

    Ok(SensitivityGrid {
        spot_samples,
        volatility_samples,
        call_matrix,
        put_matrix,
        sampling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn fixed() -> FixedParameters {
        FixedParameters {
            strike: 100.0,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
        }
    }

    #[test]
    fn cells_match_direct_pricing() {
        let range = GridRange::new(80.0, 120.0, 0.1, 0.3).unwrap();
        let grid = build_grid(&range, &fixed()).unwrap();

        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                let direct = price(
                    grid.spot_samples[j],
                    100.0,
                    1.0,
                    grid.volatility_samples[i],
                    0.05,
                )
                .unwrap();
                assert_eq!(grid.cell(i, j), Some((direct.call, direct.put)));
            }
        }
        assert_eq!(grid.cell(GRID_SIZE, 0), None);
    }

    #[test]
    fn rounded_sampling_prices_with_labels() {
        // 0.1 + 0.2/9 = 0.12222.. -> label 0.12, raw sample differs from label.
        let range = GridRange::new(80.0, 120.0, 0.1, 0.3).unwrap();
        let raw = build_grid(&range, &fixed()).unwrap();
        let rounded =
            build_grid_with_sampling(&range, &fixed(), VolatilitySampling::Rounded).unwrap();

        assert_eq!(raw.volatility_labels(), rounded.volatility_labels());
        assert_eq!(rounded.volatility_samples, rounded.volatility_labels());
        assert_ne!(raw.volatility_samples[1], rounded.volatility_samples[1]);
        assert_ne!(raw.call_matrix[1], rounded.call_matrix[1]);
        // Endpoints are already at two decimals.
        assert_eq!(raw.call_matrix[0], rounded.call_matrix[0]);
    }

    #[test]
    fn invalid_fixed_parameters_fail_before_pricing() {
        let range = GridRange::new(80.0, 120.0, 0.1, 0.3).unwrap();
        let bad = FixedParameters {
            strike: 0.0,
            ..fixed()
        };
        assert!(matches!(
            build_grid(&range, &bad),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));
    }
}
