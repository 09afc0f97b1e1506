mod snapshot;
mod text;

pub use snapshot::{
    BatchResult, PriceHistoryPoint, SentimentDistribution, SentimentHistoryPoint,
    SentimentNewsItem, SentimentSnapshot,
};
pub use text::{
    BatchSummary, DEFAULT_MAX_HEADLINES, DEFAULT_MAX_TEXT_LINES, DEFAULT_WRAP_WIDTH,
    REPORT_RULE, REPORT_TITLE, ReportTextBuilder, analysis_pdf_filename, batch_report_filename,
    wrap_line, wrap_lines,
};
