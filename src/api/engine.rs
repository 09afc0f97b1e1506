use std::borrow::Cow;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{ChartKind, ProjectedSeries, ZoomState, ZoomToggle, project_visible};
use crate::document::PdfDocument;
use crate::error::ReportResult;
use crate::interaction::{ChartInteractionState, HoverInfo, hover_at};
use crate::render::ChartFigure;
use crate::report::{BatchResult, ReportTextBuilder, SentimentSnapshot};

use super::ReportConfig;

/// Entry point for hosts: chart queries, interaction events and exports.
///
/// The engine owns only configuration. Zoom and hover cells belong to the
/// caller and are passed in explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportEngine {
    config: ReportConfig,
}

impl ReportEngine {
    pub fn new(config: ReportConfig) -> ReportResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Projects the visible window of `kind` into the chart viewport.
    #[must_use]
    pub fn project_chart(
        &self,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        zoom: &ZoomState,
    ) -> ProjectedSeries {
        let viewport = self.config.chart_viewport;
        let window = zoom.window(kind);
        let series = match kind {
            ChartKind::Price => project_visible(&snapshot.price_history, window, viewport),
            ChartKind::Sentiment => project_visible(&snapshot.sentiment_history, window, viewport),
        };
        debug!(
            ?kind,
            raw = snapshot.history_len(kind),
            projected = series.len(),
            zoomed = window.is_some(),
            "projected chart"
        );
        series
    }

    /// SVG path data for the on-screen chart.
    #[must_use]
    pub fn chart_path(
        &self,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        zoom: &ZoomState,
    ) -> String {
        self.project_chart(kind, snapshot, zoom).to_svg_path()
    }

    #[must_use]
    pub fn chart_figure(
        &self,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        zoom: &ZoomState,
    ) -> ChartFigure {
        ChartFigure::from_series(kind, &self.project_chart(kind, snapshot, zoom))
    }

    /// Hover annotation for a pointer at logical x `local_x`, without
    /// touching any state.
    #[must_use]
    pub fn hover(
        &self,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        zoom: &ZoomState,
        local_x: f64,
    ) -> Option<HoverInfo> {
        hover_at(kind, &self.project_chart(kind, snapshot, zoom), local_x)
    }

    pub fn pointer_move(
        &self,
        state: &mut ChartInteractionState,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        local_x: f64,
    ) -> Option<HoverInfo> {
        let viewport = self.config.chart_viewport;
        let hover = match kind {
            ChartKind::Price => {
                state.on_pointer_move(kind, &snapshot.price_history, local_x, viewport)
            }
            ChartKind::Sentiment => {
                state.on_pointer_move(kind, &snapshot.sentiment_history, local_x, viewport)
            }
        };
        hover.cloned()
    }

    pub fn double_click(
        &self,
        state: &mut ChartInteractionState,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
        local_x: f64,
    ) -> ZoomToggle {
        let viewport = self.config.chart_viewport;
        let outcome = match kind {
            ChartKind::Price => {
                state.on_double_click(kind, &snapshot.price_history, local_x, viewport)
            }
            ChartKind::Sentiment => {
                state.on_double_click(kind, &snapshot.sentiment_history, local_x, viewport)
            }
        };
        debug!(?kind, ?outcome, "zoom toggled");
        outcome
    }

    pub fn open_dialog(
        &self,
        state: &mut ChartInteractionState,
        kind: ChartKind,
        snapshot: &SentimentSnapshot,
    ) {
        state.open_dialog(kind, snapshot.history_len(kind));
    }

    #[must_use]
    pub fn analysis_lines(
        &self,
        snapshot: &SentimentSnapshot,
        generated_at: DateTime<Utc>,
    ) -> Vec<String> {
        ReportTextBuilder::new(generated_at)
            .with_max_headlines(self.config.max_headlines)
            .analysis_lines(snapshot)
    }

    #[must_use]
    pub fn batch_report(&self, results: &[BatchResult], generated_at: DateTime<Utc>) -> String {
        ReportTextBuilder::new(generated_at).batch_text(results)
    }

    /// One-page PDF for a snapshot, drawing each chart's current window.
    pub fn analysis_document(
        &self,
        snapshot: &SentimentSnapshot,
        zoom: &ZoomState,
        generated_at: DateTime<Utc>,
    ) -> ReportResult<PdfDocument> {
        let snapshot = sanitize_score(snapshot);
        let lines = self.analysis_lines(&snapshot, generated_at);
        let price = self.chart_figure(ChartKind::Price, &snapshot, zoom);
        let sentiment = self.chart_figure(ChartKind::Sentiment, &snapshot, zoom);
        self.config
            .document_builder()
            .build(&lines, Some(&snapshot), &price, &sentiment)
    }
}

fn sanitize_score(snapshot: &SentimentSnapshot) -> Cow<'_, SentimentSnapshot> {
    if snapshot.overall_score.is_finite() {
        return Cow::Borrowed(snapshot);
    }
    warn!(
        ticker = %snapshot.ticker,
        score = snapshot.overall_score,
        "non-finite overall score, reporting zero"
    );
    let mut sanitized = snapshot.clone();
    sanitized.overall_score = 0.0;
    Cow::Owned(sanitized)
}
