//! Decoration pipeline for the rendered poem.
//!
//! The pipeline edits the rendered page through a fixed series of stages:
//! 1. Center (align the page)
//! 2. Title (artist, song and album lines)
//! 3. Font (font face for the page)
//! 4. Cover (album cover image)
//! 5. Background (page background color)
//! 6. Write (output to disk)
//!
//! Every stage sees the document exactly as the previous stage left it.

mod context;
mod document;
mod edit;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::PoemDocument;
pub use error::PipelineError;

use stages::{BackgroundStage, CenterStage, CoverStage, FontStage, TitleStage, WriteStage};

use crate::config::PoemConfig;

/// A stage in the decoration pipeline.
///
/// Stages transform the document sequentially. Each stage receives the
/// document by mutable reference and edits it in place before it is passed
/// to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Process the document through this stage.
    ///
    /// Logical faults (a missing anchor) go through `ctx.fault`, which decides
    /// between a warning and an error.
    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The decoration pipeline.
///
/// The default pipeline includes: center → title → font → cover → background → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a pipeline with the five decorations and no write stage.
    pub fn decorations(config: &PoemConfig) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(CenterStage);
        pipeline.add_stage(TitleStage::new(&config.title));
        pipeline.add_stage(FontStage::new(&config.font));
        pipeline.add_stage(CoverStage::new(&config.cover));
        pipeline.add_stage(BackgroundStage::new(&config.background));
        pipeline
    }

    /// Create the default pipeline: the decorations followed by the write stage.
    pub fn default_pipeline(config: &PoemConfig) -> Self {
        let mut pipeline = Self::decorations(config);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a document.
    pub fn run(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            stage.process(doc, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline(&PoemConfig::default())
    }
}
