//! Presentation output for sensitivity grids: SVG heatmaps and CSV tables.
//!
//! Renderers return the document as a `String`; callers decide where it is written.

pub mod svg;
pub mod table;

pub use svg::{render_matrix_svg, render_pnl_heatmaps, render_price_heatmaps, HeatmapStyle};
pub use table::{matrix_to_csv, parameters_to_csv};
