use crate::error::{ReportError, ReportResult};

/// RGB color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const NEGATIVE: Self = Self::rgb(0.94, 0.35, 0.35);
    pub const NEUTRAL: Self = Self::rgb(0.82, 0.76, 0.63);
    pub const POSITIVE: Self = Self::rgb(0.2, 0.8, 0.6);
    pub const CHART_BORDER: Self = Self::rgb(0.1, 0.7, 0.68);
    pub const BAR_TRACK: Self = Self::rgb(0.12, 0.16, 0.2);
    pub const GAUGE_PIVOT: Self = Self::rgb(0.15, 0.2, 0.25);

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn validate(self) -> ReportResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ReportError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke,
    Fill,
}

/// One drawing instruction in page space (origin bottom-left, y up).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SaveState,
    RestoreState,
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    /// Selects the page font outside a text object.
    Font {
        size: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    /// Open stroked polyline through `points`.
    Polyline {
        points: Vec<(f64, f64)>,
    },
    /// Single-line text object. `font_size` of `None` keeps the current font.
    Text {
        x: f64,
        y: f64,
        font_size: Option<f64>,
        text: String,
    },
    /// Text rotated a quarter turn counter-clockwise around `(x, y)`.
    RotatedText {
        x: f64,
        y: f64,
        font_size: f64,
        text: String,
    },
    /// Multi-line text object advanced by `leading` per line.
    TextBlock {
        x: f64,
        y: f64,
        font_size: f64,
        leading: f64,
        lines: Vec<String>,
    },
}

impl DrawOp {
    #[must_use]
    pub fn text(x: f64, y: f64, font_size: f64, text: impl Into<String>) -> Self {
        Self::Text {
            x,
            y,
            font_size: Some(font_size),
            text: text.into(),
        }
    }

    pub fn validate(&self) -> ReportResult<()> {
        match self {
            Self::SaveState | Self::RestoreState => Ok(()),
            Self::StrokeColor(color) | Self::FillColor(color) => color.validate(),
            Self::LineWidth(width) => {
                if width.is_finite() && *width > 0.0 {
                    Ok(())
                } else {
                    Err(ReportError::InvalidData(
                        "line width must be finite and > 0".to_owned(),
                    ))
                }
            }
            Self::Font { size } => validate_font_size(*size),
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => ensure_finite(&[*x, *y, *width, *height], "rect"),
            Self::Polyline { points } => {
                if points.is_empty() {
                    return Err(ReportError::InvalidData(
                        "polyline must have at least one point".to_owned(),
                    ));
                }
                for (x, y) in points {
                    ensure_finite(&[*x, *y], "polyline")?;
                }
                Ok(())
            }
            Self::Text {
                x,
                y,
                font_size,
                text,
            } => {
                ensure_finite(&[*x, *y], "text")?;
                if let Some(size) = font_size {
                    validate_font_size(*size)?;
                }
                ensure_text(text)
            }
            Self::RotatedText {
                x,
                y,
                font_size,
                text,
            } => {
                ensure_finite(&[*x, *y], "rotated text")?;
                validate_font_size(*font_size)?;
                ensure_text(text)
            }
            Self::TextBlock {
                x,
                y,
                font_size,
                leading,
                ..
            } => {
                ensure_finite(&[*x, *y, *leading], "text block")?;
                validate_font_size(*font_size)
            }
        }
    }
}

fn ensure_finite(values: &[f64], what: &str) -> ReportResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ReportError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn ensure_text(text: &str) -> ReportResult<()> {
    if text.is_empty() {
        Err(ReportError::InvalidData(
            "text primitive must not be empty".to_owned(),
        ))
    } else {
        Ok(())
    }
}

fn validate_font_size(size: f64) -> ReportResult<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ReportError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ))
    }
}
