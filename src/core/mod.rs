pub mod axis;
pub mod format;
pub mod projection;
pub mod types;
pub mod zoom;

pub use axis::{AxisLabel, AxisLabels, x_axis_labels, y_axis_labels};
pub use projection::{
    LinePath, ProjectedPoint, ProjectedSeries, project_series, project_series_with,
    project_visible,
};
pub use types::{ChartKind, PerKind, SeriesSample, TimeSeriesPoint, Viewport};
pub use zoom::{
    ZoomState, ZoomToggle, ZoomWindow, centered_window, default_window, visible_slice,
    zoom_window_size,
};
