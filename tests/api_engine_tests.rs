use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use sentiment_report::core::{ChartKind, Viewport, ZoomState, ZoomToggle, ZoomWindow};
use sentiment_report::interaction::ChartInteractionState;
use sentiment_report::report::{
    BatchResult, PriceHistoryPoint, SentimentDistribution, SentimentHistoryPoint,
    SentimentSnapshot,
};
use sentiment_report::{ReportConfig, ReportEngine};

fn snapshot(len: usize) -> SentimentSnapshot {
    SentimentSnapshot {
        ticker: "AMD".to_owned(),
        overall_score: -0.12,
        sentiment_label: "Neutral".to_owned(),
        distribution: SentimentDistribution::default(),
        confidence: 0.5,
        sources_analyzed: 0,
        current_price: Some(150.0),
        price_history: (0..len)
            .map(|i| PriceHistoryPoint {
                date: format!("2024-07-{:02}", i % 28 + 1),
                close: Some(100.0 + i as f64),
            })
            .collect(),
        sentiment_history: (0..len)
            .map(|i| SentimentHistoryPoint {
                date: format!("2024-07-{:02}", i % 28 + 1),
                score: Some(if i % 2 == 0 { 0.5 } else { -0.5 }),
            })
            .collect(),
        news: Vec::new(),
    }
}

#[test]
fn chart_path_follows_zoom_window() {
    let engine = ReportEngine::default();
    let snapshot = snapshot(20);
    let mut zoom = ZoomState::default();

    assert_eq!(engine.project_chart(ChartKind::Price, &snapshot, &zoom).len(), 20);

    zoom.set_window(ChartKind::Price, Some(ZoomWindow::new(10, 14)));
    let series = engine.project_chart(ChartKind::Price, &snapshot, &zoom);
    assert_eq!(series.len(), 5);
    assert_eq!(series.points[0].raw_index, 10);
    assert!(engine.chart_path(ChartKind::Price, &snapshot, &zoom).starts_with("M0.0,110.0 L80.0,82.5"));

    // the sentiment chart is unaffected
    assert_eq!(engine.project_chart(ChartKind::Sentiment, &snapshot, &zoom).len(), 20);
}

#[test]
fn custom_viewport_drives_projection() {
    let engine =
        ReportEngine::new(ReportConfig::default().with_chart_viewport(Viewport::new(100, 50)))
            .expect("engine");
    let series = engine.project_chart(ChartKind::Price, &snapshot(3), &ZoomState::default());
    assert_relative_eq!(series.points[2].x, 100.0);
    assert_relative_eq!(series.points[0].y, 50.0);
}

#[test]
fn stateless_hover_matches_stateful_pointer_move() {
    let engine = ReportEngine::default();
    let snapshot = snapshot(12);
    let zoom = ZoomState::default();
    let mut state = ChartInteractionState::default();

    let pure = engine
        .hover(ChartKind::Sentiment, &snapshot, &zoom, 150.0)
        .expect("hover");
    let tracked = engine
        .pointer_move(&mut state, ChartKind::Sentiment, &snapshot, 150.0)
        .expect("hover");
    assert_eq!(pure, tracked);
    assert_eq!(state.hover(ChartKind::Sentiment), Some(&pure));
    assert!(pure.value == "0.500" || pure.value == "-0.500");
}

#[test]
fn double_click_toggles_through_engine() {
    let engine = ReportEngine::default();
    let snapshot = snapshot(30);
    let mut state = ChartInteractionState::default();

    let outcome = engine.double_click(&mut state, ChartKind::Price, &snapshot, 0.0);
    assert_eq!(outcome, ZoomToggle::Applied(ZoomWindow::new(0, 9)));
    assert_eq!(
        engine
            .project_chart(ChartKind::Price, &snapshot, state.zoom())
            .len(),
        10
    );

    let outcome = engine.double_click(&mut state, ChartKind::Price, &snapshot, 0.0);
    assert_eq!(outcome, ZoomToggle::Cleared);
    assert_eq!(state.zoom(), &ZoomState::default());
}

#[test]
fn dialog_applies_default_zoom() {
    let engine = ReportEngine::default();
    let snapshot = snapshot(30);
    let mut state = ChartInteractionState::default();

    engine.open_dialog(&mut state, ChartKind::Sentiment, &snapshot);
    assert_eq!(
        state.zoom().window(ChartKind::Sentiment),
        Some(ZoomWindow::new(10, 19))
    );
    state.close_dialog(ChartKind::Sentiment);
    assert!(!state.zoom().is_zoomed(ChartKind::Sentiment));
}

#[test]
fn zoomed_document_draws_only_the_window() {
    let engine = ReportEngine::default();
    let snapshot = snapshot(30);
    let generated_at = Utc
        .with_ymd_and_hms(2024, 7, 31, 0, 0, 0)
        .single()
        .expect("timestamp");

    let mut zoom = ZoomState::default();
    let full = engine
        .analysis_document(&snapshot, &zoom, generated_at)
        .expect("document");
    zoom.apply_default(ChartKind::Price, snapshot.price_history.len());
    let zoomed = engine
        .analysis_document(&snapshot, &zoom, generated_at)
        .expect("document");

    let count_segments = |bytes: &[u8]| {
        std::str::from_utf8(bytes)
            .expect("utf8")
            .lines()
            .filter(|line| line.ends_with(" l"))
            .count()
    };
    assert!(count_segments(zoomed.bytes()) < count_segments(full.bytes()));
}

#[test]
fn batch_report_uses_snapshot_rows() {
    let engine = ReportEngine::default();
    let generated_at = Utc
        .with_ymd_and_hms(2024, 7, 31, 0, 0, 0)
        .single()
        .expect("timestamp");
    let rows = vec![BatchResult::from_snapshot(&snapshot(1))];
    let text = engine.batch_report(&rows, generated_at);
    assert!(text.ends_with("AMD    | Neutral  | -0.120 | $150.00"));
}

#[test]
fn analysis_lines_respect_headline_limit() {
    let engine = ReportEngine::new(ReportConfig::default().with_max_headlines(0)).expect("engine");
    let mut snapshot = snapshot(2);
    snapshot.news = SentimentSnapshot::from_json_str(
        r#"{ "ticker": "AMD", "overall_score": 0, "sentiment_label": "Neutral",
             "news": [{ "headline": "h", "sentiment_score": 0.1, "sentiment_label": "Neutral" }] }"#,
    )
    .expect("json")
    .news;
    let generated_at = Utc
        .with_ymd_and_hms(2024, 7, 31, 0, 0, 0)
        .single()
        .expect("timestamp");
    let lines = engine.analysis_lines(&snapshot, generated_at);
    assert_eq!(lines.last().map(String::as_str), Some("Recent Headlines:"));
}
