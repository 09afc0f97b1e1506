mod config;
mod engine;

pub use config::ReportConfig;
pub use engine::ReportEngine;
