//! Default pipeline stages.
//!
//! The standard decoration pipeline consists of:
//!
//! 1. **CenterStage** - Center the page (`<html align="center">`)
//! 2. **TitleStage** - Insert the artist, song and album lines
//! 3. **FontStage** - Open a `<font face=...>` for the rest of the page
//! 4. **CoverStage** - Insert the album cover image
//! 5. **BackgroundStage** - Color the page (`<body bgcolor=...>`)
//! 6. **WriteStage** - Write the final HTML to the output path

mod background;
mod center;
mod cover;
mod font;
mod title;
mod write;

pub use background::BackgroundStage;
pub use center::CenterStage;
pub use cover::CoverStage;
pub use font::FontStage;
pub use title::TitleStage;
pub use write::WriteStage;

use super::edit::{HEADER_LINES, add_attribute, has_header, splice_after_header};
use super::{PipelineContext, PipelineError, PoemDocument};

/// Add `attribute` to the first occurrence of `marker`, reporting a fault if
/// the marker is missing.
fn substitute(
    stage: &str,
    marker: &str,
    attribute: &str,
    doc: &mut PoemDocument,
    ctx: &mut PipelineContext,
) -> Result<(), PipelineError> {
    match add_attribute(&doc.content, marker, attribute) {
        Some(content) => doc.content = content,
        None => ctx.fault(stage, format!("marker '{marker}' not found; page left unchanged"))?,
    }

    Ok(())
}

/// Splice `lines` after the header, reporting a fault if the header is short.
fn splice<S: AsRef<str>>(
    stage: &str,
    lines: &[S],
    doc: &mut PoemDocument,
    ctx: &mut PipelineContext,
) -> Result<(), PipelineError> {
    if !has_header(&doc.content) {
        ctx.fault(
            stage,
            format!("page has fewer than {HEADER_LINES} header lines; inserting at the end"),
        )?;
    }

    doc.content = splice_after_header(&doc.content, lines);
    Ok(())
}
