//! Document type for pipeline processing.

use std::path::PathBuf;

/// The rendered poem page being decorated.
///
/// `content` starts as the bare page skeleton produced by the renderer and
/// is edited in place by each stage.
#[derive(Debug, Clone)]
pub struct PoemDocument {
    /// The plain-text file the page was rendered from
    pub source_path: PathBuf,

    /// Current HTML text of the page
    pub content: String,
}

impl PoemDocument {
    pub fn new(source_path: PathBuf, content: String) -> Self {
        Self {
            source_path,
            content,
        }
    }

    /// Number of lines in the current content.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
