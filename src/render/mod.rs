mod chart_block;
mod distribution;
mod frame;
mod gauge;
mod null_renderer;
mod pdf_content;
mod primitives;
mod vector;

pub use chart_block::{CHART_BLOCK_HEIGHT, CHART_BLOCK_WIDTH, ChartFigure, render_chart_block};
pub use distribution::{
    DISTRIBUTION_BLOCK_HEIGHT, DISTRIBUTION_BLOCK_WIDTH, bar_fill_width, bar_track_width,
    render_distribution_block,
};
pub use frame::RenderFrame;
pub use gauge::{
    GAUGE_ARC_STEP_DEG, GAUGE_BANDS, GAUGE_BLOCK_HEIGHT, GAUGE_BLOCK_WIDTH, GAUGE_RADIUS,
    arc_points, gauge_needle_rotation, needle_angle_deg, render_gauge_block,
};
pub use null_renderer::NullRenderer;
pub use pdf_content::{
    PDF_FONT_RESOURCE, PdfContentRenderer, escape_pdf_text, pdf_coord, pdf_number,
};
pub use primitives::{Color, DrawOp, Paint};
pub use vector::{BlockLayout, VectorChartRenderer};

use crate::error::ReportResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so block layout code
/// stays independent of the output format.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ReportResult<()>;
}
