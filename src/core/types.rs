use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Logical drawing size shared by on-screen and document renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Logical chart space used by the dashboard charts.
    pub const CHART: Self = Self::new(320, 110);

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ReportResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ReportError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::CHART
    }
}

/// Dated sample consumed by the projector.
///
/// `value` returns `None` for samples the upstream feed left empty; the
/// projector treats those exactly like non-finite numbers.
pub trait SeriesSample {
    fn date(&self) -> &str;
    fn value(&self) -> Option<f64>;
}

/// Generic `(date, value)` sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

impl SeriesSample for TimeSeriesPoint {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> Option<f64> {
        Some(self.value)
    }
}

/// Closed set of charts the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Price,
    Sentiment,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::Price, Self::Sentiment];

    /// Formats a sample value the way hover tooltips show it.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Price => crate::core::format::format_currency(value),
            Self::Sentiment => format!("{value:.3}"),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Price => "Price Trend",
            Self::Sentiment => "Sentiment Trend",
        }
    }

    #[must_use]
    pub fn axis_title(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Sentiment => "Sentiment",
        }
    }
}

/// One value per chart kind.
///
/// The kind set is closed, so per-kind state lives in plain fields instead of
/// a keyed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerKind<T> {
    pub price: T,
    pub sentiment: T,
}

impl<T> PerKind<T> {
    #[must_use]
    pub const fn new(price: T, sentiment: T) -> Self {
        Self { price, sentiment }
    }

    #[must_use]
    pub fn get(&self, kind: ChartKind) -> &T {
        match kind {
            ChartKind::Price => &self.price,
            ChartKind::Sentiment => &self.sentiment,
        }
    }

    pub fn get_mut(&mut self, kind: ChartKind) -> &mut T {
        match kind {
            ChartKind::Price => &mut self.price,
            ChartKind::Sentiment => &mut self.sentiment,
        }
    }
}
