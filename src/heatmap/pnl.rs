//! Profit and loss of a held option position across a sensitivity grid.

use super::types::*;
use crate::error::{PricingError, Result};
use crate::models::bs::OptionPrices;

/// A long position in the call and/or the put, with the price paid per contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Position {
    pub call_purchase_price: f64,
    pub call_quantity: f64,
    pub put_purchase_price: f64,
    pub put_quantity: f64,
}

/// P&L of each leg and of the whole position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionPnl {
    pub call: f64,
    pub put: f64,
    pub total: f64,
}

/// Position P&L laid out like the [`SensitivityGrid`] it was derived from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlGrid {
    pub spot_samples: [f64; GRID_SIZE],
    pub volatility_samples: [f64; GRID_SIZE],
    pub call_pnl: PriceMatrix,
    pub put_pnl: PriceMatrix,
}

impl PnlGrid {
    /// Combined P&L of both legs per cell.
    pub fn total(&self) -> PriceMatrix {
        let mut total = self.call_pnl;
        for (row, put_row) in total.iter_mut().zip(self.put_pnl.iter()) {
            for (cell, put) in row.iter_mut().zip(put_row.iter()) {
                *cell += put;
            }
        }
        total
    }
}

impl Position {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("call_purchase_price", self.call_purchase_price),
            ("call_quantity", self.call_quantity),
            ("put_purchase_price", self.put_purchase_price),
            ("put_quantity", self.put_quantity),
        ];
        for (name, value) in fields {
            if value < 0.0 || !value.is_finite() {
                return Err(PricingError::parameter(name, value, "must be >= 0 and finite"));
            }
        }
        Ok(())
    }

    fn call_pnl(&self, call: f64) -> f64 {
        (call - self.call_purchase_price) * self.call_quantity
    }

    fn put_pnl(&self, put: f64) -> f64 {
        (put - self.put_purchase_price) * self.put_quantity
    }

    /// P&L of the position marked at a single pair of model prices.
    pub fn headline_pnl(&self, prices: &OptionPrices) -> Result<PositionPnl> {
        self.validate()?;
        let call = self.call_pnl(prices.call);
        let put = self.put_pnl(prices.put);
        Ok(PositionPnl {
            call,
            put,
            total: call + put,
        })
    }
}

/// Marks `position` against every cell of `grid`.
pub fn pnl_grid(grid: &SensitivityGrid, position: &Position) -> Result<PnlGrid> {
    position.validate()?;

    let call_pnl = grid.call_matrix.map(|row| row.map(|c| position.call_pnl(c)));
    let put_pnl = grid.put_matrix.map(|row| row.map(|p| position.put_pnl(p)));

    Ok(PnlGrid {
        spot_samples: grid.spot_samples,
        volatility_samples: grid.volatility_samples,
        call_pnl,
        put_pnl,
    })
}
