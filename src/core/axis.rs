use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::format::{format_fixed, format_short_date};
use crate::core::projection::ProjectedSeries;

/// Inset of the top and bottom value labels from the chart edges.
pub const Y_LABEL_EDGE_INSET: f64 = 6.0;

/// Tick label at a logical coordinate along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub position: f64,
    pub label: String,
}

pub type AxisLabels = SmallVec<[AxisLabel; 3]>;

/// First, middle and last visible sample, labelled with their short date.
///
/// Series shorter than three samples yield one label per distinct sample.
#[must_use]
pub fn x_axis_labels(series: &ProjectedSeries) -> AxisLabels {
    let mut labels = AxisLabels::new();
    let Some(last) = series.points.len().checked_sub(1) else {
        return labels;
    };

    let mut indices: SmallVec<[usize; 3]> = SmallVec::from_buf([0, last / 2, last]);
    indices.dedup();
    for index in indices {
        let point = &series.points[index];
        labels.push(AxisLabel {
            position: point.x,
            label: format_short_date(&point.date),
        });
    }
    labels
}

/// Max, mid and min of the visible values, top to bottom, two decimals.
#[must_use]
pub fn y_axis_labels(series: &ProjectedSeries) -> AxisLabels {
    let mut labels = AxisLabels::new();
    if series.is_empty() {
        return labels;
    }

    let (min, max) = series
        .points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    let mid = min / 2.0 + max / 2.0;
    let height = series.viewport.height_f64();

    for (position, value) in [
        (Y_LABEL_EDGE_INSET, max),
        (height / 2.0, mid),
        (height - Y_LABEL_EDGE_INSET, min),
    ] {
        labels.push(AxisLabel {
            position,
            label: format_fixed(value, 2),
        });
    }
    labels
}
