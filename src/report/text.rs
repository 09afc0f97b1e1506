use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::core::format::{format_fixed, format_optional_currency};
use crate::report::{BatchResult, SentimentSnapshot};

pub const REPORT_TITLE: &str = "FINANCIAL SENTIMENT ANALYSIS REPORT";
pub const REPORT_RULE: &str = "===================================";
pub const DEFAULT_MAX_HEADLINES: usize = 6;
pub const DEFAULT_WRAP_WIDTH: usize = 92;
pub const DEFAULT_MAX_TEXT_LINES: usize = 20;

/// Aggregates over a batch of results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary<'a> {
    pub average_score: f64,
    pub most_positive: Option<&'a BatchResult>,
    pub most_negative: Option<&'a BatchResult>,
}

impl<'a> BatchSummary<'a> {
    /// Average, highest and lowest score. Ties keep the earliest row.
    #[must_use]
    pub fn from_results(results: &'a [BatchResult]) -> Self {
        let average_score = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64
        };
        let most_positive = results
            .iter()
            .reduce(|best, row| if row.score > best.score { row } else { best });
        let most_negative = results
            .iter()
            .reduce(|best, row| if row.score < best.score { row } else { best });

        Self {
            average_score,
            most_positive,
            most_negative,
        }
    }
}

/// Builds the plain-text report forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTextBuilder {
    generated_at: DateTime<Utc>,
    max_headlines: usize,
}

impl ReportTextBuilder {
    #[must_use]
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            max_headlines: DEFAULT_MAX_HEADLINES,
        }
    }

    #[must_use]
    pub fn with_max_headlines(mut self, max_headlines: usize) -> Self {
        self.max_headlines = max_headlines;
        self
    }

    fn generated_line(&self) -> String {
        format!(
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }

    /// Market report over a batch of tickers.
    #[must_use]
    pub fn batch_lines(&self, results: &[BatchResult]) -> Vec<String> {
        let summary = BatchSummary::from_results(results);
        let extreme = |label: &str, row: Option<&BatchResult>| match row {
            Some(row) => format!("{label}: {} ({})", row.ticker, format_fixed(row.score, 3)),
            None => format!("{label}: N/A"),
        };

        let mut lines = vec![
            REPORT_TITLE.to_owned(),
            REPORT_RULE.to_owned(),
            self.generated_line(),
            "Analysis Type: Sentiment".to_owned(),
            String::new(),
            format!(
                "Average Sentiment Score: {}",
                format_fixed(summary.average_score, 3)
            ),
            extreme("Most Positive", summary.most_positive),
            extreme("Most Negative", summary.most_negative),
            String::new(),
            "Ticker Summary:".to_owned(),
        ];
        lines.extend(results.iter().map(batch_row));
        lines
    }

    #[must_use]
    pub fn batch_text(&self, results: &[BatchResult]) -> String {
        self.batch_lines(results).join("\n")
    }

    /// Report for a single ticker.
    #[must_use]
    pub fn analysis_lines(&self, snapshot: &SentimentSnapshot) -> Vec<String> {
        let distribution = snapshot.distribution;
        let mut lines = vec![
            REPORT_TITLE.to_owned(),
            REPORT_RULE.to_owned(),
            self.generated_line(),
            format!("Ticker: {}", snapshot.ticker),
            "Analysis Type: Sentiment".to_owned(),
            format!(
                "Overall Score: {}",
                format_fixed(snapshot.overall_score, 3)
            ),
            format!("Label: {}", snapshot.sentiment_label),
            format!("Confidence: {}", format_fixed(snapshot.confidence, 2)),
            format!("Sources Analyzed: {}", snapshot.sources_analyzed),
            format!(
                "Current Price: {}",
                format_optional_currency(snapshot.current_price)
            ),
            String::new(),
            "Distribution:".to_owned(),
            format!("Positive: {}", distribution.positive),
            format!("Neutral: {}", distribution.neutral),
            format!("Negative: {}", distribution.negative),
            String::new(),
            "Recent Headlines:".to_owned(),
        ];

        if snapshot.news.is_empty() {
            lines.push("n/a".to_owned());
        } else {
            lines.extend(snapshot.news.iter().take(self.max_headlines).map(|item| {
                format!(
                    "- {} ({}, {})",
                    item.headline,
                    item.sentiment_label,
                    format_fixed(item.sentiment_score, 2)
                )
            }));
        }
        lines
    }

    #[must_use]
    pub fn analysis_text(&self, snapshot: &SentimentSnapshot) -> String {
        self.analysis_lines(snapshot).join("\n")
    }
}

fn batch_row(row: &BatchResult) -> String {
    format!(
        "{:<6} | {:<8} | {} | {}",
        row.ticker,
        row.label,
        format_fixed(row.score, 3),
        format_optional_currency(row.price)
    )
}

/// Splits `line` on spaces into lines of at most `max_len` characters.
///
/// Words longer than `max_len` are hard-split. A line that already fits
/// (including the empty line) is returned as-is.
#[must_use]
pub fn wrap_line(line: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    if line.chars().count() <= max_len {
        return vec![line.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split(' ') {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if candidate_len <= max_len {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = candidate_len;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word;
        while rest.chars().count() > max_len {
            let split = rest
                .char_indices()
                .nth(max_len)
                .map_or(rest.len(), |(index, _)| index);
            lines.push(rest[..split].to_owned());
            rest = &rest[split..];
        }
        current.push_str(rest);
        current_len = rest.chars().count();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps every line and keeps at most `max_lines` of the result.
#[must_use]
pub fn wrap_lines(lines: &[String], max_len: usize, max_lines: usize) -> Vec<String> {
    let mut wrapped: Vec<String> = lines
        .iter()
        .flat_map(|line| wrap_line(line, max_len))
        .collect();
    if wrapped.len() > max_lines {
        debug!(
            wrapped = wrapped.len(),
            kept = max_lines,
            "dropping wrapped lines beyond the text block"
        );
        wrapped.truncate(max_lines);
    }
    wrapped
}

/// `sentiment-report-YYYY-MM-DD.txt`
#[must_use]
pub fn batch_report_filename(date: NaiveDate) -> String {
    format!("sentiment-report-{}.txt", date.format("%Y-%m-%d"))
}

/// `sentiment-analysis-<TICKER>-YYYY-MM-DD.pdf`
#[must_use]
pub fn analysis_pdf_filename(ticker: &str, date: NaiveDate) -> String {
    format!(
        "sentiment-analysis-{}-{}.pdf",
        ticker.to_uppercase(),
        date.format("%Y-%m-%d")
    )
}
