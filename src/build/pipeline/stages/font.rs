//! Font face stage.

use super::splice;
use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};

/// Stage that opens a `<font face=...>` right after the page header, so it
/// covers everything below it.
pub struct FontStage {
    face: String,
}

impl FontStage {
    pub fn new(face: impl Into<String>) -> Self {
        Self { face: face.into() }
    }

    fn line(&self) -> String {
        format!(r#"<font face="{}">"#, self.face)
    }
}

impl Stage for FontStage {
    fn name(&self) -> &'static str {
        "font"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        splice(self.name(), &[self.line()], doc, ctx)
    }
}
