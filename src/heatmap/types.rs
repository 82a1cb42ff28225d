use crate::error::{PricingError, Result};
use crate::models::bs::{
    validate_risk_free_rate, validate_strike, validate_time_to_maturity, PricingParameters,
};
use crate::models::utils::round_to_decimals;

/// Number of samples along each heatmap axis.
pub const GRID_SIZE: usize = 10;

/// Decimal places used for axis labels (and for the priced spot samples).
pub const AXIS_DECIMALS: i32 = 2;

/// Rounds a sample to the precision shown on the axes.
pub(crate) fn round_axis(value: f64) -> f64 {
    round_to_decimals(value, AXIS_DECIMALS)
}

/// One heatmap worth of prices, indexed `[volatility_index][spot_index]`.
pub type PriceMatrix = [[f64; GRID_SIZE]; GRID_SIZE];

/// Spot and volatility bounds swept by the heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRange {
    pub min_spot: f64,
    pub max_spot: f64,
    pub min_volatility: f64,
    pub max_volatility: f64,
}

impl GridRange {
    /// Creates a validated range.
    pub fn new(
        min_spot: f64,
        max_spot: f64,
        min_volatility: f64,
        max_volatility: f64,
    ) -> Result<Self> {
        let range = Self {
            min_spot,
            max_spot,
            min_volatility,
            max_volatility,
        };
        range.validate()?;
        Ok(range)
    }

    /// Checks the bounds before any sample is generated.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("min_spot", self.min_spot),
            ("max_spot", self.max_spot),
            ("min_volatility", self.min_volatility),
            ("max_volatility", self.max_volatility),
        ];
        for (name, value) in bounds {
            if !value.is_finite() {
                return Err(PricingError::range(format!(
                    "{} ({}) must be finite",
                    name, value
                )));
            }
        }
        if self.min_spot <= 0.0 {
            return Err(PricingError::range(format!(
                "min_spot ({}) must be > 0",
                self.min_spot
            )));
        }
        // The rounded spot is what gets priced, so it has to stay positive too.
        if round_axis(self.min_spot) <= 0.0 {
            return Err(PricingError::range(format!(
                "min_spot ({}) rounds to zero at {} decimals",
                self.min_spot, AXIS_DECIMALS
            )));
        }
        // x * 100 overflows for spots near f64::MAX.
        if !round_axis(self.max_spot).is_finite() {
            return Err(PricingError::range(format!(
                "max_spot ({}) overflows when rounded to {} decimals",
                self.max_spot, AXIS_DECIMALS
            )));
        }
        if self.min_volatility <= 0.0 {
            return Err(PricingError::range(format!(
                "min_volatility ({}) must be > 0",
                self.min_volatility
            )));
        }
        if self.min_spot > self.max_spot {
            return Err(PricingError::range(format!(
                "min_spot ({}) exceeds max_spot ({})",
                self.min_spot, self.max_spot
            )));
        }
        if self.min_volatility > self.max_volatility {
            return Err(PricingError::range(format!(
                "min_volatility ({}) exceeds max_volatility ({})",
                self.min_volatility, self.max_volatility
            )));
        }
        Ok(())
    }
}

/// Inputs held constant across every cell of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParameters {
    pub strike: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
}

impl FixedParameters {
    pub fn validate(&self) -> Result<()> {
        validate_strike(self.strike)?;
        validate_time_to_maturity(self.time_to_maturity)?;
        validate_risk_free_rate(self.risk_free_rate)
    }
}

impl From<&PricingParameters> for FixedParameters {
    fn from(p: &PricingParameters) -> Self {
        Self {
            strike: p.strike,
            time_to_maturity: p.time_to_maturity,
            risk_free_rate: p.risk_free_rate,
        }
    }
}

/// Which volatility value is fed to the pricer for each heatmap row.
///
/// Spot samples are always rounded to [`AXIS_DECIMALS`] before pricing. Volatility rows
/// are labelled with rounded values but, by default, priced with the raw sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VolatilitySampling {
    /// Price with the raw evenly spaced sample; labels are rounded.
    #[default]
    Unrounded,
    /// Price with the same rounded value shown in the row label.
    Rounded,
}

/// Call and put prices over the spot x volatility cross product.
///
/// `call_matrix[i][j]` and `put_matrix[i][j]` are priced at `volatility_samples[i]`
/// and `spot_samples[j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    /// Rounded spot values; both the column labels and the priced spots
    pub spot_samples: [f64; GRID_SIZE],
    /// Volatility values fed to the pricer for each row
    pub volatility_samples: [f64; GRID_SIZE],
    pub call_matrix: PriceMatrix,
    pub put_matrix: PriceMatrix,
    /// Policy the volatility rows were priced under
    pub sampling: VolatilitySampling,
}

impl SensitivityGrid {
    /// Row labels, the volatility samples rounded for display.
    pub fn volatility_labels(&self) -> [f64; GRID_SIZE] {
        self.volatility_samples.map(round_axis)
    }

    /// Price at a given row (volatility) and column (spot).
    pub fn cell(&self, volatility_index: usize, spot_index: usize) -> Option<(f64, f64)> {
        let call = self.call_matrix.get(volatility_index)?.get(spot_index)?;
        let put = self.put_matrix[volatility_index][spot_index];
        Some((*call, put))
    }
}
