//! File writing stage.
//!
//! Writes the final HTML output to the filesystem.

use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};

/// Stage that writes the decorated page to the output path, creating any
/// necessary parent directories and replacing an existing file.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let output_path = ctx.output_path;
        let write_error = |source| PipelineError::Write {
            path: output_path.to_path_buf(),
            source,
        };

        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        std::fs::write(output_path, &doc.content).map_err(write_error)?;

        Ok(())
    }
}
