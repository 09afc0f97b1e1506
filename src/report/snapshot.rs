use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, SeriesSample};
use crate::error::{ReportError, ReportResult};

/// Non-negative headline counts per sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentDistribution {
    /// Sum of all buckets, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(self) -> u64 {
        self.positive
            .saturating_add(self.neutral)
            .saturating_add(self.negative)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub date: String,
    #[serde(default)]
    pub close: Option<f64>,
}

impl SeriesSample for PriceHistoryPoint {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> Option<f64> {
        self.close
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentHistoryPoint {
    pub date: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl SeriesSample for SentimentHistoryPoint {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> Option<f64> {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentNewsItem {
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    /// Publication time, unix seconds.
    #[serde(default)]
    pub datetime: i64,
    pub sentiment_score: f64,
    pub sentiment_label: String,
}

/// Sentiment analysis result for one ticker, as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub ticker: String,
    pub overall_score: f64,
    pub sentiment_label: String,
    #[serde(default)]
    pub distribution: SentimentDistribution,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub sources_analyzed: u64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_history: Vec<PriceHistoryPoint>,
    #[serde(default)]
    pub sentiment_history: Vec<SentimentHistoryPoint>,
    #[serde(default)]
    pub news: Vec<SentimentNewsItem>,
}

impl SentimentSnapshot {
    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ReportError::InvalidData(format!("failed to parse sentiment snapshot json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::InvalidData(format!("failed to serialize sentiment snapshot: {e}"))
        })
    }

    /// Raw length of the history backing `kind`.
    #[must_use]
    pub fn history_len(&self, kind: ChartKind) -> usize {
        match kind {
            ChartKind::Price => self.price_history.len(),
            ChartKind::Sentiment => self.sentiment_history.len(),
        }
    }

    /// Overall score clamped into `[-1, 1]`; non-finite scores read as zero.
    #[must_use]
    pub fn clamped_score(&self) -> f64 {
        if self.overall_score.is_finite() {
            self.overall_score.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One row of a batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub ticker: String,
    pub score: f64,
    pub label: String,
    pub price: Option<f64>,
}

impl BatchResult {
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        score: f64,
        label: impl Into<String>,
        price: Option<f64>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            score,
            label: label.into(),
            price,
        }
    }

    #[must_use]
    pub fn from_snapshot(snapshot: &SentimentSnapshot) -> Self {
        Self {
            ticker: snapshot.ticker.clone(),
            score: snapshot.overall_score,
            label: snapshot.sentiment_label.clone(),
            price: snapshot.current_price,
        }
    }
}
