//! Pipeline context for sharing state across stages.

use std::path::Path;

use super::PipelineError;

/// Shared context for pipeline stages.
///
/// Holds the output location and collects the warnings stages raise while
/// decorating.
pub struct PipelineContext<'a> {
    /// Where the write stage puts the finished page
    pub output_path: &'a Path,

    /// Treat logical faults as errors instead of warnings
    pub strict: bool,

    warnings: Vec<String>,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(output_path: &'a Path, strict: bool) -> Self {
        Self {
            output_path,
            strict,
            warnings: Vec::new(),
        }
    }

    /// Report a logical fault in `stage`.
    ///
    /// In strict mode this is an error; otherwise it is recorded as a warning
    /// and the stage carries on.
    pub fn fault(&mut self, stage: &str, message: impl Into<String>) -> Result<(), PipelineError> {
        let message = message.into();
        if self.strict {
            return Err(PipelineError::stage(stage, message));
        }

        self.warnings.push(format!("{stage}: {message}"));
        Ok(())
    }

    /// Record a warning that never fails the run.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_is_warning_when_lenient() {
        let mut ctx = PipelineContext::new(Path::new("poem.html"), false);
        ctx.fault("center", "marker missing").unwrap();
        assert_eq!(ctx.warnings(), ["center: marker missing".to_string()]);
    }

    #[test]
    fn test_fault_is_error_when_strict() {
        let mut ctx = PipelineContext::new(Path::new("poem.html"), true);
        let err = ctx.fault("center", "marker missing").unwrap_err();
        assert_eq!(err.to_string(), "stage 'center' failed: marker missing");
        assert!(ctx.warnings().is_empty());
    }
}
