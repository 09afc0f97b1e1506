use crate::error::ReportResult;
use crate::render::DrawOp;

/// Backend-agnostic, ordered list of drawing instructions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub ops: Vec<DrawOp>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    #[must_use]
    pub fn with_op(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Appends every instruction of `other` after the current ones.
    pub fn append(&mut self, other: RenderFrame) {
        self.ops.extend(other.ops);
    }

    pub fn validate(&self) -> ReportResult<()> {
        for op in &self.ops {
            op.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}
