use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use super::pipeline::PoemDocument;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

const PAGE_TEMPLATE_NAME: &str = "page";

/// The page skeleton. Decorations rely on `<html>` and `<body>` being the
/// first two lines.
const PAGE_TEMPLATE: &str = "<html>\n<body>\n{{ content }}\n</body>\n</html>";

/// The page renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a new renderer with the built-in page skeleton.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        // Poem text is embedded verbatim.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        Ok(Self { tera })
    }

    /// Read a plain-text poem and render it into the page skeleton.
    pub fn render_source(&self, path: &Path) -> Result<PoemDocument, RenderError> {
        let text = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(PoemDocument::new(path.to_path_buf(), self.render_text(&text)?))
    }

    /// Render plain text into the page skeleton.
    pub fn render_text(&self, text: &str) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("content", &line_breaks_to_html(text));

        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

/// Replace every line terminator with `<br>`.
///
/// `\r\n` counts as a single terminator.
pub fn line_breaks_to_html(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_skeleton() {
        let renderer = Renderer::new().unwrap();
        assert_eq!(
            renderer.render_text("Line one\nLine two").unwrap(),
            "<html>\n<body>\nLine one<br>Line two\n</body>\n</html>"
        );
    }

    #[test]
    fn test_render_text_preserves_lines_in_order() {
        let renderer = Renderer::new().unwrap();
        let source = "To ravne fløj\nover mark og mose\nmod nord";
        let html = renderer.render_text(source).unwrap();

        let body = html.lines().nth(2).unwrap();
        let segments: Vec<&str> = body.split("<br>").collect();
        assert_eq!(segments, source.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_render_text_is_not_escaped() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_text("<i>ravn</i> & krage").unwrap();
        assert!(html.contains("<i>ravn</i> & krage"));
    }

    #[test]
    fn test_render_text_does_not_expand_template_syntax() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_text("{{ content }}").unwrap();
        assert!(html.contains("\n{{ content }}\n"));
    }

    #[test]
    fn test_line_breaks_crlf() {
        assert_eq!(line_breaks_to_html("a\r\nb\nc"), "a<br>b<br>c");
        assert_eq!(line_breaks_to_html("a\n"), "a<br>");
    }

    #[test]
    fn test_render_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let renderer = Renderer::new().unwrap();

        let err = renderer.render_source(&path).unwrap_err();
        assert!(matches!(err, RenderError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_render_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.txt");
        std::fs::write(&path, "Line one\nLine two").unwrap();

        let doc = Renderer::new().unwrap().render_source(&path).unwrap();
        assert_eq!(doc.source_path, path);
        assert_eq!(doc.line_count(), 5);
    }
}
