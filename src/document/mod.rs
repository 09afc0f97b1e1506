//! Minimal one-page PDF assembly.
//!
//! The page carries a wrapped text block followed by the vector chart
//! blocks. Objects are written in id order through a write-ahead byte
//! accumulator, so recorded offsets and the content `/Length` are taken from
//! the bytes actually emitted.

mod writer;

use tracing::debug;

use crate::error::ReportResult;
use crate::render::{
    BlockLayout, ChartFigure, DrawOp, PDF_FONT_RESOURCE, PdfContentRenderer, RenderFrame,
    Renderer, VectorChartRenderer,
};
use crate::report::{
    DEFAULT_MAX_TEXT_LINES, DEFAULT_WRAP_WIDTH, SentimentSnapshot, wrap_lines,
};

use writer::ObjectWriter;

pub const PDF_HEADER: &str = "%PDF-1.4";
pub const CATALOG_ID: usize = 1;
pub const PAGES_ID: usize = 2;
pub const PAGE_ID: usize = 3;
pub const FONT_ID: usize = 4;
pub const CONTENT_ID: usize = 5;
pub const OBJECT_COUNT: usize = 5;

/// Finished document bytes plus the bookkeeping used to write them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    bytes: Vec<u8>,
    object_offsets: Vec<usize>,
    xref_offset: usize,
    content_length: usize,
}

impl PdfDocument {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte offset of object `id` (1-based).
    #[must_use]
    pub fn object_offset(&self, id: usize) -> Option<usize> {
        id.checked_sub(1)
            .and_then(|index| self.object_offsets.get(index).copied())
    }

    #[must_use]
    pub fn object_offsets(&self) -> &[usize] {
        &self.object_offsets
    }

    #[must_use]
    pub fn xref_offset(&self) -> usize {
        self.xref_offset
    }

    /// Declared `/Length` of the page content stream.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds the one-page analysis document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBuilder {
    page_width: f64,
    page_height: f64,
    font_name: String,
    wrap_width: usize,
    max_text_lines: usize,
    text_origin: (f64, f64),
    text_font_size: f64,
    text_leading: f64,
    layout: BlockLayout,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            font_name: "Helvetica".to_owned(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            max_text_lines: DEFAULT_MAX_TEXT_LINES,
            text_origin: (72.0, 720.0),
            text_font_size: 12.0,
            text_leading: 14.0,
            layout: BlockLayout::default(),
        }
    }
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    pub fn with_layout(mut self, layout: BlockLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Text block instructions for the wrapped, truncated report lines.
    #[must_use]
    pub fn text_frame(&self, lines: &[String]) -> RenderFrame {
        let (x, y) = self.text_origin;
        RenderFrame::new().with_op(DrawOp::TextBlock {
            x,
            y,
            font_size: self.text_font_size,
            leading: self.text_leading,
            lines: wrap_lines(lines, self.wrap_width, self.max_text_lines),
        })
    }

    /// Page content stream: text block first, then the chart blocks.
    pub fn content_stream(
        &self,
        lines: &[String],
        snapshot: Option<&SentimentSnapshot>,
        price: &ChartFigure,
        sentiment: &ChartFigure,
    ) -> ReportResult<String> {
        let mut renderer = PdfContentRenderer::new();
        renderer.render(&self.text_frame(lines))?;
        let charts = VectorChartRenderer::new(self.layout).render(snapshot, price, sentiment);
        renderer.render(&charts)?;
        Ok(renderer.finish())
    }

    /// Assembles the complete document.
    pub fn build(
        &self,
        lines: &[String],
        snapshot: Option<&SentimentSnapshot>,
        price: &ChartFigure,
        sentiment: &ChartFigure,
    ) -> ReportResult<PdfDocument> {
        let content = self.content_stream(lines, snapshot, price, sentiment)?;
        Ok(self.build_from_content(&content))
    }

    /// Wraps an already serialized content stream into the five-object
    /// document.
    #[must_use]
    pub fn build_from_content(&self, content: &str) -> PdfDocument {
        let mut writer = ObjectWriter::new(PDF_HEADER);
        writer.write_dict(&format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"));
        writer.write_dict(&format!(
            "<< /Type /Pages /Kids [{PAGE_ID} 0 R] /Count 1 >>"
        ));
        writer.write_dict(&format!(
            "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /{PDF_FONT_RESOURCE} {FONT_ID} 0 R >> >> /Contents {CONTENT_ID} 0 R >>",
            crate::render::pdf_number(self.page_width),
            crate::render::pdf_number(self.page_height),
        ));
        writer.write_dict(&format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
            self.font_name
        ));
        let (_, content_length) = writer.write_stream(content.as_bytes());
        let (bytes, object_offsets, xref_offset) = writer.finish(CATALOG_ID);

        debug!(
            bytes = bytes.len(),
            content_length,
            xref_offset,
            "built report document"
        );

        PdfDocument {
            bytes,
            object_offsets,
            xref_offset,
            content_length,
        }
    }
}
