//! Sensitivity heatmaps
//!
//! Re-prices the option over a 10x10 cross product of spot and volatility samples
//! while strike, maturity and rate stay fixed, and optionally marks a held position
//! against the resulting prices.

pub mod grid;
pub mod pnl;
pub mod types;

pub use grid::*;
pub use pnl::*;
pub use types::*;
