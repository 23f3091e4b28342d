//! Album cover stage.

use super::splice;
use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};

/// Width and height of the cover image, in pixels.
pub const COVER_SIZE: u32 = 360;

/// Stage that inserts the album cover image after the page header.
///
/// The path is embedded as-is; whether the image exists is checked by the
/// builder after writing.
pub struct CoverStage {
    path: String,
}

impl CoverStage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn line(&self) -> String {
        format!(
            r#"<img src="{}" height={COVER_SIZE} width={COVER_SIZE}><br><br>"#,
            self.path
        )
    }
}

impl Stage for CoverStage {
    fn name(&self) -> &'static str {
        "cover"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        splice(self.name(), &[self.line()], doc, ctx)
    }
}
