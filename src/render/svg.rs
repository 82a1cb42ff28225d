//! Annotated SVG heatmaps.
//!
//! Rows are volatility levels (first sample at the top), columns are spot levels, and
//! every cell carries its value to two decimals.

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::heatmap::types::round_axis;
use crate::heatmap::{PnlGrid, PriceMatrix, SensitivityGrid, GRID_SIZE};

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    pub caption_size: u32,
    pub cell_font_size: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            caption_size: 24,
            cell_font_size: 12.0,
        }
    }
}

/// Blue for the smallest value through to red for the largest.
fn cell_color(value: f64, lo: f64, hi: f64) -> HSLColor {
    let v = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
    HSLColor(240.0 / 360.0 * (1.0 - v), 0.7, 0.45 + 0.1 * v)
}

/// Label for an axis tick, empty unless the tick sits on a cell centre.
fn axis_label(labels: &[f64; GRID_SIZE], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 || index >= GRID_SIZE as f64 {
        return String::new();
    }
    format!("{:.2}", labels[index as usize])
}

/// Renders one matrix as an SVG document.
pub fn render_matrix_svg(
    title: &str,
    matrix: &PriceMatrix,
    spot_labels: &[f64; GRID_SIZE],
    volatility_labels: &[f64; GRID_SIZE],
    style: &HeatmapStyle,
) -> Result<String> {
    let (lo, hi) = matrix
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let top = (GRID_SIZE - 1) as f64;
    let row_labels: [f64; GRID_SIZE] =
        std::array::from_fn(|k| volatility_labels[GRID_SIZE - 1 - k]);

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(title, ("sans-serif", style.caption_size))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..top + 0.5, -0.5f64..top + 0.5)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(GRID_SIZE)
            .y_labels(GRID_SIZE)
            .x_label_formatter(&|x| axis_label(spot_labels, *x))
            .y_label_formatter(&|y| axis_label(&row_labels, *y))
            .x_desc("Spot price")
            .y_desc("Volatility")
            .draw()?;

        let cells = matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &value)| (j as f64, top - i as f64, value))
        });

        chart.draw_series(cells.clone().map(|(x, y, value)| {
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                cell_color(value, lo, hi).filled(),
            )
        }))?;

        let text_style = TextStyle::from(("sans-serif", style.cell_font_size).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(cells.map(|(x, y, value)| {
            Text::new(format!("{:.2}", value), (x, y), text_style.clone())
        }))?;

        root.present()?;
    }
    Ok(svg)
}

/// Call and put heatmaps for a price grid, in that order.
pub fn render_price_heatmaps(
    grid: &SensitivityGrid,
    style: &HeatmapStyle,
) -> Result<(String, String)> {
    let volatility_labels = grid.volatility_labels();
    let call = render_matrix_svg(
        "Call",
        &grid.call_matrix,
        &grid.spot_samples,
        &volatility_labels,
        style,
    )?;
    let put = render_matrix_svg(
        "Put",
        &grid.put_matrix,
        &grid.spot_samples,
        &volatility_labels,
        style,
    )?;
    Ok((call, put))
}

/// Call and put P&L heatmaps, in that order.
pub fn render_pnl_heatmaps(pnl: &PnlGrid, style: &HeatmapStyle) -> Result<(String, String)> {
    let volatility_labels = pnl.volatility_samples.map(round_axis);
    let call = render_matrix_svg(
        "Call P&L",
        &pnl.call_pnl,
        &pnl.spot_samples,
        &volatility_labels,
        style,
    )?;
    let put = render_matrix_svg(
        "Put P&L",
        &pnl.put_pnl,
        &pnl.spot_samples,
        &volatility_labels,
        style,
    )?;
    Ok((call, put))
}
