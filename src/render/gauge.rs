use crate::core::format::format_fixed;
use crate::render::{Color, DrawOp, Paint, RenderFrame};
use crate::report::SentimentSnapshot;

pub const GAUGE_BLOCK_WIDTH: f64 = 220.0;
pub const GAUGE_BLOCK_HEIGHT: f64 = 120.0;
pub const GAUGE_RADIUS: f64 = 52.0;
/// Angular sampling step of the gauge arcs, in degrees.
pub const GAUGE_ARC_STEP_DEG: f64 = 8.0;

const NEEDLE_INSET: f64 = 8.0;
const PIVOT_SIZE: f64 = 6.0;

/// Bands of the dial, from the negative end (180°) to the positive end (0°).
pub const GAUGE_BANDS: [(f64, f64, Color); 3] = [
    (180.0, 120.0, Color::NEGATIVE),
    (120.0, 60.0, Color::NEUTRAL),
    (60.0, 0.0, Color::POSITIVE),
];

/// Needle angle in degrees for a score: -1 maps to 180°, +1 to 0°.
#[must_use]
pub fn needle_angle_deg(score: f64) -> f64 {
    let clamped = if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    180.0 - (clamped + 1.0) * 90.0
}

/// Rotation of the on-screen gauge needle, in degrees from vertical.
///
/// Scores at or above 0.2 sweep `[0, 60]`, scores at or below 0.1 sweep
/// `[-60, 0]` and the band between them covers `[-10, 10]`.
#[must_use]
pub fn gauge_needle_rotation(score: f64) -> f64 {
    const NEUTRAL_MIN: f64 = 0.1;
    const NEUTRAL_MAX: f64 = 0.2;
    const NEUTRAL_SPAN: f64 = 20.0;

    let clamped = if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    if clamped >= NEUTRAL_MAX {
        return (clamped - NEUTRAL_MAX) / (1.0 - NEUTRAL_MAX) * 60.0;
    }
    if clamped <= NEUTRAL_MIN {
        return (NEUTRAL_MIN - clamped) / (1.0 + NEUTRAL_MIN) * -60.0;
    }
    (clamped - NEUTRAL_MIN) / (NEUTRAL_MAX - NEUTRAL_MIN) * NEUTRAL_SPAN - NEUTRAL_SPAN / 2.0
}

/// Points along an arc from `start_deg` down to `end_deg`, one every
/// [`GAUGE_ARC_STEP_DEG`], with the end point always included.
#[must_use]
pub fn arc_points(
    center: (f64, f64),
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> Vec<(f64, f64)> {
    let on_arc = |deg: f64| {
        let rad = deg.to_radians();
        (center.0 + rad.cos() * radius, center.1 + rad.sin() * radius)
    };

    let mut points = Vec::new();
    let mut angle = start_deg;
    while angle >= end_deg {
        points.push(on_arc(angle));
        angle -= GAUGE_ARC_STEP_DEG;
    }
    points.push(on_arc(end_deg));
    points
}

/// Gauge block with its lower-left corner at `(x, y)`.
#[must_use]
pub fn render_gauge_block(snapshot: &SentimentSnapshot, x: f64, y: f64) -> RenderFrame {
    let center = (x + GAUGE_BLOCK_WIDTH / 2.0, y + 30.0);
    let angle = needle_angle_deg(snapshot.clamped_score()).to_radians();
    let needle_len = GAUGE_RADIUS - NEEDLE_INSET;
    let needle = (
        center.0 + angle.cos() * needle_len,
        center.1 + angle.sin() * needle_len,
    );

    let mut frame = RenderFrame::new();
    frame.push(DrawOp::SaveState);
    frame.push(DrawOp::LineWidth(1.5));
    for (start, end, color) in GAUGE_BANDS {
        frame.push(DrawOp::StrokeColor(color));
        frame.push(DrawOp::Polyline {
            points: arc_points(center, GAUGE_RADIUS, start, end),
        });
    }
    frame.push(DrawOp::StrokeColor(Color::BLACK));
    frame.push(DrawOp::LineWidth(1.0));
    frame.push(DrawOp::Polyline {
        points: vec![center, needle],
    });
    frame.push(DrawOp::FillColor(Color::GAUGE_PIVOT));
    frame.push(DrawOp::Rect {
        x: center.0 - PIVOT_SIZE / 2.0,
        y: center.1 - PIVOT_SIZE / 2.0,
        width: PIVOT_SIZE,
        height: PIVOT_SIZE,
        paint: Paint::Fill,
    });
    frame.push(DrawOp::FillColor(Color::BLACK));
    frame.push(DrawOp::text(
        x,
        y + GAUGE_BLOCK_HEIGHT - 6.0,
        11.0,
        "Signal Gauge",
    ));
    frame.push(DrawOp::text(
        x,
        y + 8.0,
        10.0,
        format!(
            "Score {} | {}",
            format_fixed(snapshot.overall_score, 3),
            snapshot.sentiment_label
        ),
    ));
    frame.push(DrawOp::RestoreState);
    frame
}
