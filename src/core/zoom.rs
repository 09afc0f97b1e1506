use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, PerKind};

/// Smallest window the zoom helpers ever produce.
pub const MIN_ZOOM_WINDOW: usize = 5;
/// Fraction of the series a zoom window covers.
pub const ZOOM_WINDOW_RATIO: f64 = 0.35;

/// Inclusive sub-range of a series' raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub start: usize,
    pub end: usize,
}

impl ZoomWindow {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Number of samples covered (bounds are inclusive).
    #[must_use]
    pub fn sample_count(self) -> usize {
        self.end - self.start + 1
    }

    /// Clamps the window into `[0, series_len - 1]`.
    ///
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn clamp_to(self, series_len: usize) -> Option<Self> {
        let last = series_len.checked_sub(1)?;
        let start = self.start.min(last);
        let end = self.end.min(last).max(start);
        Some(Self { start, end })
    }
}

/// `max(5, floor(0.35 * len))`.
#[must_use]
pub fn zoom_window_size(series_len: usize) -> usize {
    let scaled = (series_len as f64 * ZOOM_WINDOW_RATIO).floor() as usize;
    scaled.max(MIN_ZOOM_WINDOW)
}

/// Window of [`zoom_window_size`] samples centered on `center`, shifted so
/// it fits inside the series.
#[must_use]
pub fn centered_window(series_len: usize, center: usize) -> Option<ZoomWindow> {
    let last = series_len.checked_sub(1)?;
    let size = zoom_window_size(series_len);
    let half = size / 2;
    let start = center.min(last).saturating_sub(half);
    let end = last.min(start + size - 1);
    let start = (end + 1).saturating_sub(size);
    Some(ZoomWindow { start, end })
}

/// Default window centered on the middle sample.
#[must_use]
pub fn default_window(series_len: usize) -> Option<ZoomWindow> {
    centered_window(series_len, series_len / 2)
}

/// Returns the raw-index offset and the visible part of `samples`.
#[must_use]
pub fn visible_slice<T>(samples: &[T], window: Option<ZoomWindow>) -> (usize, &[T]) {
    match window.and_then(|w| w.clamp_to(samples.len())) {
        Some(w) => (w.start, &samples[w.start..=w.end]),
        None => (0, samples),
    }
}

/// Outcome of a zoom toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomToggle {
    /// An active window was removed; the full range is visible again.
    Cleared,
    /// A new window became active.
    Applied(ZoomWindow),
    /// Nothing to zoom (empty series).
    Unchanged,
}

/// Caller-owned zoom cells, one per chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoomState {
    windows: PerKind<Option<ZoomWindow>>,
}

impl ZoomState {
    #[must_use]
    pub fn window(&self, kind: ChartKind) -> Option<ZoomWindow> {
        *self.windows.get(kind)
    }

    #[must_use]
    pub fn is_zoomed(&self, kind: ChartKind) -> bool {
        self.windows.get(kind).is_some()
    }

    pub fn set_window(&mut self, kind: ChartKind, window: Option<ZoomWindow>) {
        *self.windows.get_mut(kind) = window;
    }

    pub fn clear(&mut self, kind: ChartKind) {
        self.set_window(kind, None);
    }

    /// Installs the default window for `kind`. Empty series are left alone.
    pub fn apply_default(&mut self, kind: ChartKind, series_len: usize) -> Option<ZoomWindow> {
        let window = default_window(series_len)?;
        self.set_window(kind, Some(window));
        Some(window)
    }

    /// Clears an active window, or zooms around `raw_index` when none is active.
    pub fn toggle(&mut self, kind: ChartKind, series_len: usize, raw_index: usize) -> ZoomToggle {
        if series_len == 0 {
            return ZoomToggle::Unchanged;
        }
        if self.is_zoomed(kind) {
            self.clear(kind);
            return ZoomToggle::Cleared;
        }
        match centered_window(series_len, raw_index) {
            Some(window) => {
                self.set_window(kind, Some(window));
                ZoomToggle::Applied(window)
            }
            None => ZoomToggle::Unchanged,
        }
    }
}
