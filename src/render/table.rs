//! CSV tables: price/P&L matrices labelled by their axes, and the input summary.

use anyhow::Result;

use crate::heatmap::{PriceMatrix, GRID_SIZE};
use crate::models::bs::{OptionPrices, PricingParameters};

/// Header of the label column; the remaining header cells are spot labels.
pub const CORNER_HEADER: &str = "volatility/spot";

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// One header row of spot labels, then one row per volatility level.
///
/// Labels are written to two decimals, cell values at full precision.
pub fn matrix_to_csv(
    matrix: &PriceMatrix,
    spot_labels: &[f64; GRID_SIZE],
    volatility_labels: &[f64; GRID_SIZE],
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(GRID_SIZE + 1);
    header.push(CORNER_HEADER.to_string());
    header.extend(spot_labels.iter().map(|s| format!("{:.2}", s)));
    writer.write_record(&header)?;

    for (label, row) in volatility_labels.iter().zip(matrix.iter()) {
        let mut record = Vec::with_capacity(GRID_SIZE + 1);
        record.push(format!("{:.2}", label));
        record.extend(row.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    finish(writer)
}

/// Input summary plus the headline prices rounded for display.
pub fn parameters_to_csv(params: &PricingParameters, prices: &OptionPrices) -> Result<String> {
    let shown = prices.rounded(2);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "spot",
        "strike",
        "time_to_maturity",
        "volatility",
        "risk_free_rate",
        "call",
        "put",
    ])?;
    writer.write_record([
        params.spot.to_string(),
        params.strike.to_string(),
        params.time_to_maturity.to_string(),
        params.volatility.to_string(),
        params.risk_free_rate.to_string(),
        format!("{:.2}", shown.call),
        format!("{:.2}", shown.put),
    ])?;
    finish(writer)
}
