//! Centering stage.

use super::substitute;
use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};

/// Stage that centers the page by adding `align="center"` to the first
/// `html` token.
pub struct CenterStage;

impl Stage for CenterStage {
    fn name(&self) -> &'static str {
        "center"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        substitute(self.name(), "html", r#"align="center""#, doc, ctx)
    }
}
