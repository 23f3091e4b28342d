//! Title block stage.

use super::splice;
use crate::build::pipeline::{PipelineContext, PipelineError, PoemDocument, Stage};
use crate::config::TitleConfig;

/// Stage that inserts the title block after the page header:
/// the artist, the song title in a larger font, the album credit and a
/// blank line.
pub struct TitleStage {
    artist: String,
    song: String,
    album: String,
}

impl TitleStage {
    pub fn new(title: &TitleConfig) -> Self {
        Self {
            artist: title.artist.clone(),
            song: title.song.clone(),
            album: title.album.clone(),
        }
    }

    fn lines(&self) -> [String; 4] {
        [
            format!("{}<br>", self.artist),
            format!("<font size=6>{}</font><br>", self.song),
            format!(r#"FRA ALBUMET "{}"<br>"#, self.album),
            "<br>".to_string(),
        ]
    }
}

impl Stage for TitleStage {
    fn name(&self) -> &'static str {
        "title"
    }

    fn process(
        &self,
        doc: &mut PoemDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        splice(self.name(), &self.lines(), doc, ctx)
    }
}
