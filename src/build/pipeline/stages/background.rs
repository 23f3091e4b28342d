//! Background color stage.

use super::substitute;
use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};

/// Stage that colors the page by adding `bgcolor` to the first `body` token.
pub struct BackgroundStage {
    color: String,
}

impl BackgroundStage {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Stage for BackgroundStage {
    fn name(&self) -> &'static str {
        "background"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let attribute = format!(r#"bgcolor="{}""#, self.color);
        substitute(self.name(), "body", &attribute, doc, ctx)
    }
}
