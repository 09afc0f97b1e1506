use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::document::DocumentBuilder;
use crate::error::{ReportError, ReportResult};
use crate::report::{DEFAULT_MAX_HEADLINES, DEFAULT_MAX_TEXT_LINES, DEFAULT_WRAP_WIDTH};

/// Public report configuration.
///
/// Serializable so hosts can persist it; every field has a default, so a
/// partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_chart_viewport")]
    pub chart_viewport: Viewport,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_max_text_lines")]
    pub max_text_lines: usize,
    #[serde(default = "default_max_headlines")]
    pub max_headlines: usize,
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    #[serde(default = "default_font_name")]
    pub font_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_viewport: default_chart_viewport(),
            wrap_width: default_wrap_width(),
            max_text_lines: default_max_text_lines(),
            max_headlines: default_max_headlines(),
            page_width: default_page_width(),
            page_height: default_page_height(),
            font_name: default_font_name(),
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn with_chart_viewport(mut self, viewport: Viewport) -> Self {
        self.chart_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    #[must_use]
    pub fn with_max_text_lines(mut self, max_text_lines: usize) -> Self {
        self.max_text_lines = max_text_lines;
        self
    }

    #[must_use]
    pub fn with_max_headlines(mut self, max_headlines: usize) -> Self {
        self.max_headlines = max_headlines;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    #[must_use]
    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        if !self.chart_viewport.is_valid() {
            return Err(ReportError::InvalidViewport {
                width: self.chart_viewport.width,
                height: self.chart_viewport.height,
            });
        }
        if self.wrap_width == 0 {
            return Err(ReportError::InvalidConfig(
                "wrap width must be >= 1".to_owned(),
            ));
        }
        for (name, value) in [("width", self.page_width), ("height", self.page_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ReportError::InvalidConfig(format!(
                    "page {name} must be finite and > 0"
                )));
            }
        }
        if self.font_name.is_empty()
            || self
                .font_name
                .chars()
                .any(|c| c.is_whitespace() || c == '/')
        {
            return Err(ReportError::InvalidConfig(format!(
                "font name `{}` is not a valid PDF name",
                self.font_name
            )));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ReportError::InvalidData(format!("failed to parse report config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::InvalidData(format!("failed to serialize report config: {e}"))
        })
    }

    #[must_use]
    pub fn document_builder(&self) -> DocumentBuilder {
        DocumentBuilder::new()
            .with_page_size(self.page_width, self.page_height)
            .with_font_name(self.font_name.clone())
            .with_wrap_width(self.wrap_width)
            .with_max_text_lines(self.max_text_lines)
    }
}

fn default_chart_viewport() -> Viewport {
    Viewport::CHART
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_max_text_lines() -> usize {
    DEFAULT_MAX_TEXT_LINES
}

fn default_max_headlines() -> usize {
    DEFAULT_MAX_HEADLINES
}

fn default_page_width() -> f64 {
    612.0
}

fn default_page_height() -> f64 {
    792.0
}

fn default_font_name() -> String {
    "Helvetica".to_owned()
}
