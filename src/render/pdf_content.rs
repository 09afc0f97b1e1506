use crate::error::ReportResult;
use crate::render::{Color, DrawOp, Paint, RenderFrame, Renderer};

/// Resource name the page dictionary binds to its single font.
pub const PDF_FONT_RESOURCE: &str = "F1";

/// Serializes frames into page content-stream operators.
///
/// Every rendered frame appends its operators; `finish` joins them with
/// newlines into the stream body.
#[derive(Debug, Default)]
pub struct PdfContentRenderer {
    lines: Vec<String>,
}

impl PdfContentRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn push_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::SaveState => self.lines.push("q".to_owned()),
            DrawOp::RestoreState => self.lines.push("Q".to_owned()),
            DrawOp::StrokeColor(color) => self.lines.push(format!("{} RG", color_operands(*color))),
            DrawOp::FillColor(color) => self.lines.push(format!("{} rg", color_operands(*color))),
            DrawOp::LineWidth(width) => self.lines.push(format!("{} w", pdf_number(*width))),
            DrawOp::Font { size } => self
                .lines
                .push(format!("/{PDF_FONT_RESOURCE} {} Tf", pdf_number(*size))),
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let paint = match paint {
                    Paint::Stroke => 'S',
                    Paint::Fill => 'f',
                };
                self.lines.push(format!(
                    "{} {} {} {} re {paint}",
                    pdf_number(*x),
                    pdf_number(*y),
                    pdf_number(*width),
                    pdf_number(*height)
                ));
            }
            DrawOp::Polyline { points } => {
                for (index, (x, y)) in points.iter().enumerate() {
                    let operator = if index == 0 { 'm' } else { 'l' };
                    self.lines
                        .push(format!("{} {} {operator}", pdf_coord(*x), pdf_coord(*y)));
                }
                self.lines.push("S".to_owned());
            }
            DrawOp::Text {
                x,
                y,
                font_size,
                text,
            } => {
                let font = font_size
                    .map(|size| format!("/{PDF_FONT_RESOURCE} {} Tf ", pdf_number(size)))
                    .unwrap_or_default();
                self.lines.push(format!(
                    "BT {font}{} {} Td ({}) Tj ET",
                    pdf_number(*x),
                    pdf_number(*y),
                    escape_pdf_text(text)
                ));
            }
            DrawOp::RotatedText {
                x,
                y,
                font_size,
                text,
            } => self.lines.push(format!(
                "q 1 0 0 1 {} {} cm 0 1 -1 0 0 0 cm BT /{PDF_FONT_RESOURCE} {} Tf 0 0 Td ({}) Tj ET Q",
                pdf_number(*x),
                pdf_number(*y),
                pdf_number(*font_size),
                escape_pdf_text(text)
            )),
            DrawOp::TextBlock {
                x,
                y,
                font_size,
                leading,
                lines,
            } => {
                self.lines.push("BT".to_owned());
                self.lines
                    .push(format!("/{PDF_FONT_RESOURCE} {} Tf", pdf_number(*font_size)));
                self.lines
                    .push(format!("{} {} Td", pdf_number(*x), pdf_number(*y)));
                self.lines.push(format!("{} TL", pdf_number(*leading)));
                for (index, line) in lines.iter().enumerate() {
                    if index > 0 {
                        self.lines.push("T*".to_owned());
                    }
                    self.lines.push(format!("({}) Tj", escape_pdf_text(line)));
                }
                self.lines.push("ET".to_owned());
            }
        }
    }
}

impl Renderer for PdfContentRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ReportResult<()> {
        frame.validate()?;
        for op in &frame.ops {
            self.push_op(op);
        }
        Ok(())
    }
}

/// Escapes the characters that delimit PDF literal strings.
#[must_use]
pub fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(ch),
        }
    }
    out
}

/// Operand text: integral values without a fraction, otherwise at most two
/// decimals with trailing zeros trimmed.
#[must_use]
pub fn pdf_number(value: f64) -> String {
    let fixed = format!("{:.2}", value + 0.0);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Path coordinate text, always two decimals.
#[must_use]
pub fn pdf_coord(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

fn color_operands(color: Color) -> String {
    format!(
        "{} {} {}",
        pdf_number(color.red),
        pdf_number(color.green),
        pdf_number(color.blue)
    )
}
