use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::format::format_short_date;
use crate::core::{
    ChartKind, PerKind, ProjectedSeries, SeriesSample, Viewport, ZoomState, ZoomToggle,
    project_visible,
};

/// Tooltip height in logical chart units (two text lines).
pub const TOOLTIP_BOX_HEIGHT: f64 = 28.0;
/// Gap between the hovered point and the tooltip box.
pub const TOOLTIP_GAP: f64 = 8.0;
/// Minimum distance kept between the tooltip box and the chart edges.
pub const TOOLTIP_EDGE_MARGIN: f64 = 4.0;
/// Minimum distance kept between the tooltip box and the chart top.
pub const TOOLTIP_TOP_MARGIN: f64 = 6.0;
/// Points right of this fraction of the width get their tooltip on the left.
pub const TOOLTIP_FLIP_RATIO: f64 = 0.65;

/// Hover annotation for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverInfo {
    /// Index of the hovered sample in the unwindowed series.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: String,
    pub box_x: f64,
    pub box_y: f64,
    pub box_width: f64,
}

/// Converts a client-space pointer position into the logical chart x.
///
/// `rendered_left`/`rendered_width` describe where the chart is drawn on
/// screen. Returns `None` for a zero-width or non-finite layout.
#[must_use]
pub fn normalize_pointer_x(
    client_x: f64,
    rendered_left: f64,
    rendered_width: f64,
    viewport: Viewport,
) -> Option<f64> {
    if !rendered_width.is_finite() || rendered_width <= 0.0 {
        return None;
    }
    let local = (client_x - rendered_left) / rendered_width * viewport.width_f64();
    local.is_finite().then_some(local)
}

/// Picks the visible sample nearest to `local_x` and lays out its tooltip.
///
/// Returns `None` when nothing is drawn or the pointer is not finite.
#[must_use]
pub fn hover_at(kind: ChartKind, series: &ProjectedSeries, local_x: f64) -> Option<HoverInfo> {
    let last = series.points.len().checked_sub(1)?;
    if !local_x.is_finite() {
        return None;
    }

    let index = nearest_visible_index(series, local_x, last);
    let point = &series.points[index];

    let label = format_short_date(&point.date);
    let value = kind.format_value(point.value);
    let text_len = label.chars().count().max(value.chars().count());
    let box_width = (text_len as f64 * 6.0 + 12.0).max(64.0);

    let width = series.viewport.width_f64();
    let offset_x = if point.x > width * TOOLTIP_FLIP_RATIO {
        -box_width - TOOLTIP_GAP
    } else {
        TOOLTIP_GAP
    };
    let box_x = (point.x + offset_x)
        .min(width - box_width - TOOLTIP_EDGE_MARGIN)
        .max(TOOLTIP_EDGE_MARGIN);
    let box_y = (point.y - TOOLTIP_BOX_HEIGHT - TOOLTIP_GAP).max(TOOLTIP_TOP_MARGIN);

    Some(HoverInfo {
        index: point.raw_index,
        x: point.x,
        y: point.y,
        label,
        value,
        box_x,
        box_y,
        box_width,
    })
}

fn nearest_visible_index(series: &ProjectedSeries, local_x: f64, last: usize) -> usize {
    let slot = (local_x / series.step()).round();
    if slot <= 0.0 {
        0
    } else {
        (slot as usize).min(last)
    }
}

/// Caller-owned interaction cells for both charts.
///
/// The struct holds no series data; every event receives the samples it
/// needs, so the same state can drive any number of renderings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartInteractionState {
    zoom: ZoomState,
    hover: PerKind<Option<HoverInfo>>,
}

impl ChartInteractionState {
    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn hover(&self, kind: ChartKind) -> Option<&HoverInfo> {
        self.hover.get(kind).as_ref()
    }

    /// Recomputes the hover annotation for `kind` against its visible window.
    pub fn on_pointer_move<T: SeriesSample>(
        &mut self,
        kind: ChartKind,
        samples: &[T],
        local_x: f64,
        viewport: Viewport,
    ) -> Option<&HoverInfo> {
        let series = project_visible(samples, self.zoom.window(kind), viewport);
        if series.is_empty() {
            return self.hover.get(kind).as_ref();
        }
        *self.hover.get_mut(kind) = hover_at(kind, &series, local_x);
        self.hover.get(kind).as_ref()
    }

    pub fn on_pointer_leave(&mut self, kind: ChartKind) {
        *self.hover.get_mut(kind) = None;
    }

    /// Toggles the zoom window for `kind` around the sample under the pointer.
    ///
    /// Zooming out clears the hover; zooming in re-annotates the same
    /// pointer position against the new window.
    pub fn on_double_click<T: SeriesSample>(
        &mut self,
        kind: ChartKind,
        samples: &[T],
        local_x: f64,
        viewport: Viewport,
    ) -> ZoomToggle {
        if samples.is_empty() {
            return ZoomToggle::Unchanged;
        }
        if self.zoom.is_zoomed(kind) {
            self.zoom.clear(kind);
            *self.hover.get_mut(kind) = None;
            trace!(?kind, "zoom cleared");
            return ZoomToggle::Cleared;
        }

        let series = project_visible(samples, None, viewport);
        let Some(anchor) = hover_at(kind, &series, local_x) else {
            return ZoomToggle::Unchanged;
        };
        let outcome = self.zoom.toggle(kind, samples.len(), anchor.index);
        if let ZoomToggle::Applied(window) = outcome {
            trace!(?kind, start = window.start, end = window.end, "zoom applied");
            self.on_pointer_move(kind, samples, local_x, viewport);
        }
        outcome
    }

    /// Opens the enlarged chart view: default zoom, no hover.
    pub fn open_dialog(&mut self, kind: ChartKind, series_len: usize) {
        self.zoom.apply_default(kind, series_len);
        *self.hover.get_mut(kind) = None;
    }

    /// Closes the enlarged chart view and drops its zoom and hover.
    pub fn close_dialog(&mut self, kind: ChartKind) {
        self.zoom.clear(kind);
        *self.hover.get_mut(kind) = None;
    }
}
