use std::path::PathBuf;

use crate::config::PoemConfig;

use super::paths::{cover_asset_path, output_path_for, resolve_path};
use super::pipeline::{Pipeline, PipelineContext, PipelineError};
use super::render::Renderer;

pub struct BuildResult {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub stages: usize,
    pub warnings: Vec<String>,
}

pub struct Builder {
    config: PoemConfig,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
    strict: bool,
}

impl Builder {
    pub fn new(config: PoemConfig, base_path: PathBuf) -> Self {
        let strict = config.strict;
        Self {
            config,
            base_path,
            strict,
        }
    }

    /// Force strict mode on, regardless of the config value.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict |= strict;
        self
    }

    pub fn build(&self) -> Result<BuildResult, PipelineError> {
        // Build pipeline:
        // 1. Render the poem into the page skeleton
        // 2. Run the decorations and write the page
        // 3. Check that the cover image is where the page expects it

        let source_path = self.source_path();
        let output_path = self.output_path();

        // Step 1: Render
        let renderer = Renderer::new()?;
        let mut doc = renderer.render_source(&source_path)?;
        println!(
            "Rendered {} ({} line(s))",
            doc.source_path.display(),
            doc.line_count()
        );

        // Step 2: Decorate and write
        let pipeline = Pipeline::default_pipeline(&self.config);
        let mut ctx = PipelineContext::new(&output_path, self.strict);
        pipeline.run(&mut doc, &mut ctx)?;
        println!("Applied stages: {}", pipeline.stage_names().join(" -> "));

        // Step 3: Cover image
        if let Some(cover) = cover_asset_path(&self.config.cover, &output_path)
            && !cover.exists()
        {
            ctx.warn(format!("album cover not found at {}", cover.display()));
        }

        let stages = pipeline.stage_names().len();
        let warnings = ctx.warnings().to_vec();

        Ok(BuildResult {
            source_path,
            output_path,
            stages,
            warnings,
        })
    }

    /// Absolute location of the poem.
    pub fn source_path(&self) -> PathBuf {
        resolve_path(&self.base_path, &self.config.source)
    }

    /// Where the page is written.
    pub fn output_path(&self) -> PathBuf {
        match &self.config.output {
            Some(output) => resolve_path(&self.base_path, output),
            None => output_path_for(&self.source_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(poem: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("res")).unwrap();
        std::fs::write(dir.path().join("res/tvende_ravne.txt"), poem).unwrap();
        dir
    }

    #[test]
    fn test_build_writes_page_next_to_source() {
        let dir = project("Line one\nLine two");
        let builder = Builder::new(PoemConfig::default(), dir.path().to_path_buf());

        let result = builder.build().unwrap();

        assert_eq!(result.output_path, dir.path().join("res/tvende_ravne.html"));
        assert_eq!(result.stages, 6);
        let html = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(html.starts_with("<html align=\"center\">\n<body bgcolor=\"#fff8dc\">\n"));
        assert!(html.contains("\nSVARTSOT<br>\n"));
        assert!(html.contains("<img src=\"ravnenes_saga.jfif\" height=360 width=360>"));
        assert!(html.contains("<font face=\"Bookman Old Style\">"));
        assert!(html.contains("\nLine one<br>Line two\n"));
    }

    #[test]
    fn test_build_is_byte_identical_across_runs() {
        let dir = project("Line one\nLine two");
        let builder = Builder::new(PoemConfig::default(), dir.path().to_path_buf());

        let first = std::fs::read(builder.build().unwrap().output_path).unwrap();
        let second = std::fs::read(builder.build().unwrap().output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_warns_about_missing_cover() {
        let dir = project("Kra");
        let builder = Builder::new(PoemConfig::default(), dir.path().to_path_buf());

        let result = builder.build().unwrap();

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("ravnenes_saga.jfif"));
    }

    #[test]
    fn test_build_finds_cover_next_to_output() {
        let dir = project("Kra");
        std::fs::write(dir.path().join("res/ravnenes_saga.jfif"), b"jfif").unwrap();
        let builder = Builder::new(PoemConfig::default(), dir.path().to_path_buf());

        assert!(builder.build().unwrap().warnings.is_empty());
    }

    #[test]
    fn test_build_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let builder = Builder::new(PoemConfig::default(), dir.path().to_path_buf());

        let err = builder.build().err().unwrap();
        assert!(matches!(err, PipelineError::Render(_)));
        assert!(!builder.output_path().exists());
    }

    #[test]
    fn test_output_override() {
        let config = PoemConfig {
            output: Some(PathBuf::from("site/index.html")),
            ..PoemConfig::default()
        };
        let builder = Builder::new(config, PathBuf::from("/project"));
        assert_eq!(builder.output_path(), PathBuf::from("/project/site/index.html"));
    }

    #[test]
    fn test_strict_flag_only_tightens() {
        let config = PoemConfig {
            strict: true,
            ..PoemConfig::default()
        };
        let builder = Builder::new(config, PathBuf::from(".")).strict(false);
        assert!(builder.strict);
    }
}
