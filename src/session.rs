//! One end-to-end calculator run: headline prices, heatmaps, optional position P&L,
//! and the rendered artefacts written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{OutputConfig, SessionConfig};
use crate::heatmap::types::round_axis;
use crate::heatmap::{
    build_grid_with_sampling, pnl_grid, FixedParameters, PnlGrid, PositionPnl, SensitivityGrid,
};
use crate::models::bs::{OptionPrices, PricingParameters};
use crate::render::{
    matrix_to_csv, parameters_to_csv, render_pnl_heatmaps, render_price_heatmaps, HeatmapStyle,
};

/// Everything computed for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub parameters: PricingParameters,
    pub prices: OptionPrices,
    pub grid: SensitivityGrid,
    pub position_pnl: Option<PositionPnl>,
    pub pnl_grid: Option<PnlGrid>,
}

/// Prices the headline option and builds the heatmaps described by `config`.
pub fn run_session(config: &SessionConfig) -> Result<SessionReport> {
    let parameters = config.pricing;
    let prices = parameters.price().context("headline pricing failed")?;
    if parameters.is_degenerate() {
        warn!(
            time_to_maturity = parameters.time_to_maturity,
            volatility = parameters.volatility,
            "degenerate inputs; headline prices use the limiting payoff"
        );
    }
    info!(call = prices.call, put = prices.put, "priced headline option");

    let grid = build_grid_with_sampling(
        &config.heatmap.range(),
        &FixedParameters::from(&parameters),
        config.heatmap.volatility_sampling,
    )
    .context("heatmap construction failed")?;

    let (position_pnl, pnl_grid) = match &config.position {
        Some(position) => {
            let headline = position.headline_pnl(&prices).context("invalid position")?;
            let grid_pnl = pnl_grid(&grid, position).context("invalid position")?;
            info!(total = headline.total, "marked position");
            (Some(headline), Some(grid_pnl))
        }
        None => (None, None),
    };

    Ok(SessionReport {
        parameters,
        prices,
        grid,
        position_pnl,
        pnl_grid,
    })
}

fn write_file(dir: &Path, name: &str, contents: &str, written: &mut Vec<PathBuf>) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    written.push(path);
    Ok(())
}

impl SessionReport {
    /// Writes the enabled artefacts into `output.directory`, returning the paths written.
    pub fn write_outputs(&self, output: &OutputConfig) -> Result<Vec<PathBuf>> {
        let dir = output.directory.as_path();
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;

        let mut written = Vec::new();

        if output.write_svg {
            let style = HeatmapStyle::default();
            let (call, put) = render_price_heatmaps(&self.grid, &style)?;
            write_file(dir, "call_heatmap.svg", &call, &mut written)?;
            write_file(dir, "put_heatmap.svg", &put, &mut written)?;

            if let Some(pnl) = &self.pnl_grid {
                let (call, put) = render_pnl_heatmaps(pnl, &style)?;
                write_file(dir, "call_pnl.svg", &call, &mut written)?;
                write_file(dir, "put_pnl.svg", &put, &mut written)?;
            }
        }

        if output.write_csv {
            let volatility_labels = self.grid.volatility_labels();
            let call = matrix_to_csv(
                &self.grid.call_matrix,
                &self.grid.spot_samples,
                &volatility_labels,
            )?;
            let put = matrix_to_csv(
                &self.grid.put_matrix,
                &self.grid.spot_samples,
                &volatility_labels,
            )?;
            write_file(dir, "call_prices.csv", &call, &mut written)?;
            write_file(dir, "put_prices.csv", &put, &mut written)?;
            write_file(
                dir,
                "parameters.csv",
                &parameters_to_csv(&self.parameters, &self.prices)?,
                &mut written,
            )?;

            if let Some(pnl) = &self.pnl_grid {
                let volatility_labels = pnl.volatility_samples.map(round_axis);
                let call = matrix_to_csv(&pnl.call_pnl, &pnl.spot_samples, &volatility_labels)?;
                let put = matrix_to_csv(&pnl.put_pnl, &pnl.spot_samples, &volatility_labels)?;
                write_file(dir, "call_pnl.csv", &call, &mut written)?;
                write_file(dir, "put_pnl.csv", &put, &mut written)?;
            }
        }

        info!(files = written.len(), directory = %dir.display(), "wrote session output");
        Ok(written)
    }
}
