//! sentiment-report: chart geometry and one-page PDF reports for ticker
//! sentiment snapshots.
//!
//! The crate projects price and sentiment histories into a fixed logical
//! chart space, resolves hover and zoom interactions against that space, and
//! serializes text plus vector charts into a self-contained PDF without any
//! document library.

pub mod api;
pub mod core;
pub mod document;
pub mod error;
pub mod interaction;
pub mod render;
pub mod report;
pub mod telemetry;

pub use api::{ReportConfig, ReportEngine};
pub use error::{ReportError, ReportResult};
