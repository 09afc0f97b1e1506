use serde::{Deserialize, Serialize};

use crate::core::zoom::ZoomWindow;
use crate::core::{SeriesSample, Viewport};

/// Sample mapped into the logical drawing space.
///
/// `raw_index` points back into the unwindowed series so hover and zoom
/// interactions can recover the source sample after windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub raw_index: usize,
    pub date: String,
}

/// Projection result for one chart: interaction points plus the viewport
/// they were projected into.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub viewport: Viewport,
    pub points: Vec<ProjectedPoint>,
}

impl ProjectedSeries {
    #[must_use]
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Horizontal distance between adjacent samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        horizontal_step(self.viewport, self.points.len())
    }

    /// Path descriptor (ordered move/line vertices) for this projection.
    #[must_use]
    pub fn path(&self) -> LinePath {
        LinePath {
            viewport: self.viewport,
            vertices: self.points.iter().map(|p| (p.x, p.y)).collect(),
        }
    }

    /// SVG path data as drawn by the dashboard, e.g. `M0.0,110.0 L160.0,55.0`.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        self.path().to_svg()
    }
}

/// Ordered polyline vertices in a logical viewport.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    pub viewport: Viewport,
    pub vertices: Vec<(f64, f64)>,
}

impl LinePath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, (x, y))| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command}{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parses `M`/`L` path data produced by [`LinePath::to_svg`].
    ///
    /// Tokens that do not hold two finite numbers are skipped, so a blank or
    /// malformed string yields an empty path.
    #[must_use]
    pub fn parse_svg(data: &str, viewport: Viewport) -> Self {
        let cleaned: String = data.chars().filter(|c| *c != 'M' && *c != 'L').collect();
        let vertices = cleaned
            .split_whitespace()
            .filter_map(|token| {
                let (x, y) = token.split_once(',')?;
                let x = x.trim().parse::<f64>().ok()?;
                let y = y.trim().parse::<f64>().ok()?;
                (x.is_finite() && y.is_finite()).then_some((x, y))
            })
            .collect();
        Self { viewport, vertices }
    }
}

#[must_use]
pub(crate) fn horizontal_step(viewport: Viewport, count: usize) -> f64 {
    viewport.width_f64() / count.saturating_sub(1).max(1) as f64
}

/// Projects samples into `viewport` using each sample's own value.
///
/// `raw_offset` is the index of `samples[0]` inside the full series.
#[must_use]
pub fn project_series<T: SeriesSample>(
    samples: &[T],
    raw_offset: usize,
    viewport: Viewport,
) -> ProjectedSeries {
    project_series_with(samples, raw_offset, viewport, SeriesSample::value)
}

/// Projects samples into `viewport` with an explicit value selector.
///
/// Non-finite (or missing) values are dropped before scaling. An empty or
/// fully non-finite input yields an empty series, which callers treat as
/// "nothing to draw". A flat series puts every point on the bottom row, and
/// `y` stays inside `[0, height]` even when `max - min` overflows.
#[must_use]
pub fn project_series_with<T, F>(
    samples: &[T],
    raw_offset: usize,
    viewport: Viewport,
    select: F,
) -> ProjectedSeries
where
    T: SeriesSample,
    F: Fn(&T) -> Option<f64>,
{
    if !viewport.is_valid() {
        return ProjectedSeries::empty(viewport);
    }

    let finite: Vec<(usize, &T, f64)> = samples
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            select(sample)
                .filter(|value| value.is_finite())
                .map(|value| (index, sample, value))
        })
        .collect();
    if finite.is_empty() {
        return ProjectedSeries::empty(viewport);
    }

    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, _, v)| {
            (lo.min(*v), hi.max(*v))
        });
    let height = viewport.height_f64();
    let step = horizontal_step(viewport, finite.len());

    let points = finite
        .into_iter()
        .enumerate()
        .map(|(position, (index, sample, value))| ProjectedPoint {
            x: position as f64 * step,
            y: height - normalized(value, min, max) * height,
            value,
            raw_index: raw_offset + index,
            date: sample.date().to_owned(),
        })
        .collect();

    ProjectedSeries { viewport, points }
}

/// Position of `value` inside `[min, max]` as a ratio in `[0, 1]`.
///
/// Flat ranges map to 0. When `max - min` overflows, the operands are halved
/// first so the ratio stays finite.
fn normalized(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let ratio = if span.is_finite() {
        if span == 0.0 { 0.0 } else { (value - min) / span }
    } else {
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };
    ratio.clamp(0.0, 1.0)
}

/// Projects the part of `samples` selected by `window` (or everything when
/// no window is active).
#[must_use]
pub fn project_visible<T: SeriesSample>(
    samples: &[T],
    window: Option<ZoomWindow>,
    viewport: Viewport,
) -> ProjectedSeries {
    let (offset, visible) = crate::core::zoom::visible_slice(samples, window);
    project_series(visible, offset, viewport)
}
