use crate::core::{
    AxisLabels, ChartKind, LinePath, ProjectedSeries, x_axis_labels, y_axis_labels,
};
use crate::render::{Color, DrawOp, Paint, RenderFrame};

/// Width of a chart block on the page, in points.
pub const CHART_BLOCK_WIDTH: f64 = 468.0;
/// Height of a chart block on the page, in points.
pub const CHART_BLOCK_HEIGHT: f64 = 110.0;

const Y_LABEL_OFFSET: f64 = 8.0;
const X_AXIS_TITLE: &str = "Time";

/// Everything a line-chart block draws: the polyline in logical chart space
/// plus its tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub kind: ChartKind,
    pub path: LinePath,
    pub x_labels: AxisLabels,
    pub y_labels: AxisLabels,
}

impl ChartFigure {
    /// Figure for a projected (possibly windowed) series.
    #[must_use]
    pub fn from_series(kind: ChartKind, series: &ProjectedSeries) -> Self {
        Self {
            kind,
            path: series.path(),
            x_labels: x_axis_labels(series),
            y_labels: y_axis_labels(series),
        }
    }

    /// Figure for a bare path descriptor, drawn without tick labels.
    #[must_use]
    pub fn from_path(kind: ChartKind, path: LinePath) -> Self {
        Self {
            kind,
            path,
            x_labels: AxisLabels::new(),
            y_labels: AxisLabels::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Line-chart block with its lower-left corner at `(x, y)`.
///
/// The figure's logical coordinates (origin top-left) are stretched onto the
/// block's page rectangle (origin bottom-left). An empty path yields an
/// empty frame.
#[must_use]
pub fn render_chart_block(figure: &ChartFigure, x: f64, y: f64) -> RenderFrame {
    let mut frame = RenderFrame::new();
    if figure.is_empty() || !figure.path.viewport.is_valid() {
        return frame;
    }

    let width = CHART_BLOCK_WIDTH;
    let height = CHART_BLOCK_HEIGHT;
    let logical_width = figure.path.viewport.width_f64();
    let logical_height = figure.path.viewport.height_f64();

    frame.push(DrawOp::SaveState);
    frame.push(DrawOp::StrokeColor(Color::CHART_BORDER));
    frame.push(DrawOp::LineWidth(1.0));
    frame.push(DrawOp::Rect {
        x,
        y,
        width,
        height,
        paint: Paint::Stroke,
    });
    frame.push(DrawOp::StrokeColor(Color::BLACK));
    frame.push(DrawOp::FillColor(Color::BLACK));
    frame.push(DrawOp::text(x, y + height + 14.0, 11.0, figure.kind.title()));

    frame.push(DrawOp::SaveState);
    frame.push(DrawOp::Font { size: 9.0 });
    for label in figure.y_labels.iter().filter(|l| !l.label.is_empty()) {
        frame.push(DrawOp::Text {
            x: x - Y_LABEL_OFFSET,
            y: y + height - (label.position / logical_height) * height + 3.0,
            font_size: None,
            text: label.label.clone(),
        });
    }
    for label in figure.x_labels.iter().filter(|l| !l.label.is_empty()) {
        frame.push(DrawOp::Text {
            x: x + (label.position / logical_width) * width,
            y: y - 6.0,
            font_size: None,
            text: label.label.clone(),
        });
    }
    frame.push(DrawOp::text(x + width - 20.0, y - 18.0, 9.0, X_AXIS_TITLE));
    frame.push(DrawOp::RotatedText {
        x: x - 36.0,
        y: y + height - 8.0,
        font_size: 9.0,
        text: figure.kind.axis_title().to_owned(),
    });
    frame.push(DrawOp::RestoreState);

    frame.push(DrawOp::SaveState);
    frame.push(DrawOp::StrokeColor(Color::BLACK));
    frame.push(DrawOp::LineWidth(1.2));
    frame.push(DrawOp::Polyline {
        points: figure
            .path
            .vertices
            .iter()
            .map(|(px, py)| {
                (
                    x + (px / logical_width) * width,
                    y + height - (py / logical_height) * height,
                )
            })
            .collect(),
    });
    frame.push(DrawOp::RestoreState);
    frame.push(DrawOp::RestoreState);
    frame
}
