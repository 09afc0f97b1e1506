use crate::render::{Color, DrawOp, Paint, RenderFrame};
use crate::report::SentimentDistribution;

pub const DISTRIBUTION_BLOCK_WIDTH: f64 = 228.0;
pub const DISTRIBUTION_BLOCK_HEIGHT: f64 = 120.0;

const BAR_INSET: f64 = 72.0;
const ROW_HEIGHT: f64 = 18.0;
const ROW_GAP: f64 = 6.0;
const MIN_FILL_WIDTH: f64 = 2.0;

/// Width of the full bar track.
#[must_use]
pub fn bar_track_width() -> f64 {
    DISTRIBUTION_BLOCK_WIDTH - 90.0
}

/// Filled width for `value` out of `total`; a zero total counts as one.
#[must_use]
pub fn bar_fill_width(value: u64, total: u64) -> f64 {
    let total = if total == 0 { 1 } else { total };
    let ratio = value as f64 / total as f64;
    (bar_track_width() * ratio).max(MIN_FILL_WIDTH)
}

/// Distribution block with its lower-left corner at `(x, y)`.
#[must_use]
pub fn render_distribution_block(distribution: SentimentDistribution, x: f64, y: f64) -> RenderFrame {
    let rows = [
        ("Positive", distribution.positive, Color::POSITIVE),
        ("Neutral", distribution.neutral, Color::NEUTRAL),
        ("Negative", distribution.negative, Color::NEGATIVE),
    ];
    let total = distribution.total();
    let bar_x = x + BAR_INSET;
    let track_width = bar_track_width();
    let start_y = y + DISTRIBUTION_BLOCK_HEIGHT - 26.0;

    let mut frame = RenderFrame::new();
    frame.push(DrawOp::SaveState);
    frame.push(DrawOp::text(
        x,
        y + DISTRIBUTION_BLOCK_HEIGHT - 6.0,
        11.0,
        "Distribution",
    ));
    for (index, (label, value, color)) in rows.into_iter().enumerate() {
        let row_y = start_y - index as f64 * (ROW_HEIGHT + ROW_GAP);
        frame.push(DrawOp::text(x, row_y + 4.0, 10.0, label));
        frame.push(DrawOp::FillColor(Color::BAR_TRACK));
        frame.push(DrawOp::Rect {
            x: bar_x,
            y: row_y,
            width: track_width,
            height: ROW_HEIGHT,
            paint: Paint::Fill,
        });
        frame.push(DrawOp::FillColor(color));
        frame.push(DrawOp::Rect {
            x: bar_x,
            y: row_y,
            width: bar_fill_width(value, total),
            height: ROW_HEIGHT,
            paint: Paint::Fill,
        });
        frame.push(DrawOp::FillColor(Color::BLACK));
        frame.push(DrawOp::text(
            bar_x + track_width + 6.0,
            row_y + 4.0,
            10.0,
            value.to_string(),
        ));
    }
    frame.push(DrawOp::RestoreState);
    frame
}
