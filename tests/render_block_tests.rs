use approx::assert_relative_eq;
use sentiment_report::core::{ChartKind, TimeSeriesPoint, Viewport, project_series};
use sentiment_report::render::{
    BlockLayout, CHART_BLOCK_HEIGHT, CHART_BLOCK_WIDTH, ChartFigure, DrawOp, GAUGE_BANDS,
    NullRenderer, PdfContentRenderer, RenderFrame, Renderer, VectorChartRenderer, arc_points,
    bar_fill_width, bar_track_width, render_chart_block, render_distribution_block,
    render_gauge_block,
};
use sentiment_report::report::{SentimentDistribution, SentimentSnapshot};

fn snapshot(score: f64) -> SentimentSnapshot {
    SentimentSnapshot::from_json_str(&format!(
        r#"{{
            "ticker": "NVDA",
            "overall_score": {score},
            "sentiment_label": "Positive",
            "distribution": {{ "positive": 6, "neutral": 3, "negative": 1 }}
        }}"#
    ))
    .expect("snapshot json")
}

fn texts(frame: &RenderFrame) -> Vec<&str> {
    frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } | DrawOp::RotatedText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn polylines(frame: &RenderFrame) -> Vec<&Vec<(f64, f64)>> {
    frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polyline { points } => Some(points),
            _ => None,
        })
        .collect()
}

fn figure(values: &[f64]) -> ChartFigure {
    let samples: Vec<TimeSeriesPoint> = values
        .iter()
        .enumerate()
        .map(|(i, v)| TimeSeriesPoint::new(format!("2024-04-{:02}", i + 1), *v))
        .collect();
    ChartFigure::from_series(
        ChartKind::Price,
        &project_series(&samples, 0, Viewport::CHART),
    )
}

#[test]
fn arcs_sample_every_eight_degrees_with_endpoint() {
    let points = arc_points((0.0, 0.0), 10.0, 60.0, 0.0);
    // 60, 52, ..., 4 then 0
    assert_eq!(points.len(), 9);
    let (x, y) = points[points.len() - 1];
    assert_relative_eq!(x, 10.0);
    assert_relative_eq!(y, 0.0);
}

#[test]
fn gauge_draws_three_bands_and_needle() {
    let frame = render_gauge_block(&snapshot(0.0), 72.0, 300.0);
    let lines = polylines(&frame);

    assert_eq!(lines.len(), GAUGE_BANDS.len() + 1);
    let needle = lines[3];
    // score 0 points straight up from the pivot at (182, 330)
    assert_relative_eq!(needle[0].0, 182.0);
    assert_relative_eq!(needle[0].1, 330.0);
    assert_relative_eq!(needle[1].0, 182.0, epsilon = 1e-9);
    assert_relative_eq!(needle[1].1, 374.0, epsilon = 1e-9);

    assert_eq!(texts(&frame), vec!["Signal Gauge", "Score 0.000 | Positive"]);
    assert!(frame.ops.iter().any(|op| matches!(op, DrawOp::Rect { width, .. } if *width == 6.0)));
}

#[test]
fn gauge_needle_clamps_out_of_range_scores() {
    let frame = render_gauge_block(&snapshot(4.0), 0.0, 0.0);
    let needle = polylines(&frame)[3];
    // +1 points along the positive x axis
    assert_relative_eq!(needle[1].0 - needle[0].0, 44.0, epsilon = 1e-9);
    assert_relative_eq!(needle[1].1 - needle[0].1, 0.0, epsilon = 1e-9);
}

#[test]
fn distribution_bars_are_proportional() {
    assert_relative_eq!(bar_track_width(), 138.0);
    assert_relative_eq!(bar_fill_width(5, 10), 69.0);
    assert_relative_eq!(bar_fill_width(0, 10), 2.0);
    // a zero total counts as one
    assert_relative_eq!(bar_fill_width(0, 0), 2.0);

    let frame = render_distribution_block(
        SentimentDistribution {
            positive: 6,
            neutral: 3,
            negative: 1,
        },
        312.0,
        300.0,
    );
    let fills: Vec<f64> = frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 6);
    assert_relative_eq!(fills[1], 138.0 * 0.6, epsilon = 1e-9);
    assert_relative_eq!(fills[3], 138.0 * 0.3, epsilon = 1e-9);
    assert_relative_eq!(fills[5], 13.8, epsilon = 1e-9);
    assert_eq!(
        texts(&frame),
        vec!["Distribution", "Positive", "6", "Neutral", "3", "Negative", "1"]
    );
}

#[test]
fn saturated_distribution_counts_keep_bars_inside_track() {
    let distribution = SentimentDistribution {
        positive: u64::MAX,
        neutral: u64::MAX,
        negative: 0,
    };
    assert_eq!(distribution.total(), u64::MAX);

    let frame = render_distribution_block(distribution, 312.0, 300.0);
    let widths: Vec<f64> = frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    assert_eq!(widths.len(), 6);
    assert_relative_eq!(widths[1], 138.0, epsilon = 1e-9);
    assert_relative_eq!(widths[3], 138.0, epsilon = 1e-9);
    assert_relative_eq!(widths[5], 2.0);
    assert!(frame.validate().is_ok());
}

#[test]
fn chart_block_scales_logical_space_onto_block() {
    let frame = render_chart_block(&figure(&[1.0, 2.0, 3.0]), 72.0, 160.0);
    let line = polylines(&frame)[0];

    assert_eq!(line.len(), 3);
    assert_relative_eq!(line[0].0, 72.0);
    assert_relative_eq!(line[0].1, 160.0);
    assert_relative_eq!(line[1].0, 72.0 + CHART_BLOCK_WIDTH / 2.0);
    assert_relative_eq!(line[1].1, 160.0 + CHART_BLOCK_HEIGHT / 2.0);
    assert_relative_eq!(line[2].0, 72.0 + CHART_BLOCK_WIDTH);
    assert_relative_eq!(line[2].1, 160.0 + CHART_BLOCK_HEIGHT);
}

#[test]
fn chart_block_draws_title_ticks_and_axis_titles() {
    let frame = render_chart_block(&figure(&[1.0, 2.0, 3.0]), 72.0, 160.0);
    assert_eq!(
        texts(&frame),
        vec![
            "Price Trend",
            "3.00",
            "2.00",
            "1.00",
            "Apr 01",
            "Apr 02",
            "Apr 03",
            "Time",
            "Price"
        ]
    );
}

#[test]
fn empty_figure_renders_nothing() {
    let frame = render_chart_block(&figure(&[]), 72.0, 160.0);
    assert!(frame.is_empty());
}

#[test]
fn vector_renderer_includes_blocks_conditionally() {
    let renderer = VectorChartRenderer::new(BlockLayout::default());
    let price = figure(&[1.0, 2.0]);
    let empty = figure(&[]);

    let without_snapshot = renderer.render(None, &price, &empty);
    let with_snapshot = renderer.render(Some(&snapshot(0.5)), &price, &empty);

    assert!(!texts(&without_snapshot).contains(&"Signal Gauge"));
    assert!(texts(&with_snapshot).contains(&"Signal Gauge"));
    assert!(texts(&with_snapshot).contains(&"Distribution"));
    assert!(renderer.render(None, &empty, &empty).is_empty());
}

#[test]
fn null_renderer_counts_frame_content() {
    let renderer_frame = VectorChartRenderer::default().render(
        Some(&snapshot(0.1)),
        &figure(&[1.0, 2.0, 3.0]),
        &figure(&[0.5, -0.5]),
    );
    let mut renderer = NullRenderer::default();
    renderer.render(&renderer_frame).expect("render");

    assert_eq!(renderer.last_op_count, renderer_frame.len());
    assert!(renderer.last_text_count >= 2 + 7 + 9 + 7);
}

#[test]
fn renderers_reject_non_finite_geometry() {
    let frame = RenderFrame::new().with_op(DrawOp::Polyline {
        points: vec![(0.0, f64::NAN)],
    });
    assert!(NullRenderer::default().render(&frame).is_err());
    assert!(PdfContentRenderer::new().render(&frame).is_err());

    let empty_text = RenderFrame::new().with_op(DrawOp::text(0.0, 0.0, 10.0, ""));
    assert!(NullRenderer::default().render(&empty_text).is_err());
}

#[test]
fn rotated_axis_title_uses_quarter_turn_matrix() {
    let mut renderer = PdfContentRenderer::new();
    renderer
        .render(&render_chart_block(&figure(&[1.0, 2.0]), 72.0, 20.0))
        .expect("render");
    let content = renderer.finish();
    assert!(content.contains("q 1 0 0 1 36 122 cm 0 1 -1 0 0 0 cm BT /F1 9 Tf 0 0 Td (Price) Tj ET Q"));
    assert!(content.contains("72 20 468 110 re S"));
}
