//! # bsm-heatmap: Black-Scholes Pricing and Sensitivity Heatmaps
//!
//! `bsm-heatmap` prices European calls and puts under the Black-Scholes model and
//! re-prices them over a grid of spot and volatility levels, producing the matrices
//! behind a pair of call/put heatmaps.
//!
//! ## Core Features
//!
//! - **Pricer**: closed-form Black-Scholes (no dividends) with explicit handling of zero
//!   maturity and zero volatility
//! - **Sensitivity Grid**: 10x10 call and put matrices over evenly spaced spot and
//!   volatility samples
//! - **Position P&L**: mark a held call/put position against every grid cell
//! - **Output**: annotated SVG heatmaps and CSV tables
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_heatmap::{build_grid, price, FixedParameters, GridRange};
//!
//! // Headline valuation
//! let prices = price(100.0, 100.0, 1.0, 0.2, 0.05)?;
//! println!("call {:.2} / put {:.2}", prices.call, prices.put);
//!
//! // Sensitivity sweep: spot 80-120, volatility 10%-30%
//! let range = GridRange::new(80.0, 120.0, 0.10, 0.30)?;
//! let fixed = FixedParameters { strike: 100.0, time_to_maturity: 1.0, risk_free_rate: 0.05 };
//! let grid = build_grid(&range, &fixed)?;
//!
//! // Row = volatility level, column = spot level
//! let atm_low_vol_call = grid.call_matrix[0][4];
//! # let _ = atm_low_vol_call;
//! # Ok::<(), bsm_heatmap::PricingError>(())
//! ```
//!
//! ## Rounding
//!
//! Spot samples are rounded to two decimals before they are priced. Volatility rows
//! are labelled with rounded values but priced with the raw sample unless
//! [`VolatilitySampling::Rounded`] is requested.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod heatmap;
pub mod models;
pub mod render;
#[cfg(feature = "serde")]
pub mod session;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};

// Pricer
pub use models::bs::{norm_cdf, price, OptionPrices, PricingParameters};
pub use models::utils::round_to_decimals;

// Sensitivity grid and position P&L
pub use heatmap::{
    build_grid, build_grid_with_sampling, pnl_grid, FixedParameters, GridRange, PnlGrid,
    Position, PositionPnl, PriceMatrix, SensitivityGrid, VolatilitySampling, AXIS_DECIMALS,
    GRID_SIZE,
};

#[cfg(feature = "serde")]
pub use config::{HeatmapSettings, OutputConfig, SessionConfig};
#[cfg(feature = "serde")]
pub use session::{run_session, SessionReport};
