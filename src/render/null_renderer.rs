use crate::error::ReportResult;
use crate::render::{DrawOp, RenderFrame, Renderer};

/// No-op renderer for tests and headless use.
///
/// It still validates frame content so invalid geometry is caught before it
/// reaches a document.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_op_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ReportResult<()> {
        frame.validate()?;
        self.last_op_count = frame.ops.len();
        self.last_text_count = frame
            .ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Text { .. } | DrawOp::RotatedText { .. } | DrawOp::TextBlock { .. }
                )
            })
            .count();
        Ok(())
    }
}
