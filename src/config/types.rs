//! Configuration type definitions.
//!
//! This module contains the data structures used in poemify configuration files.
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the poem, relative to the config file's directory.
pub const DEFAULT_SOURCE: &str = "res/tvende_ravne.txt";

// =============================================================================
// Poem configuration
// =============================================================================

/// Top-level configuration for a single poem page.
///
/// Every field has a default, so an empty (or missing) config file renders
/// the bundled poem with the stock decorations.
///
/// ```yaml
/// source: res/tvende_ravne.txt
/// font: Bookman Old Style
/// cover: ravnenes_saga.jfif
/// background: "#fff8dc"
/// title:
///   artist: SVARTSOT
///   song: TVENDE RAVNE
///   album: RAVNENES SAGA
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoemConfig {
    /// Path to the plain-text poem
    pub source: PathBuf,
    /// Where to write the page (defaults to `source` with an `html` extension)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Fail the run when a decoration cannot find its anchor
    pub strict: bool,
    /// Title block inserted above the poem
    pub title: TitleConfig,
    /// Font face applied to the page
    pub font: String,
    /// Album cover image, embedded as-is in the `src` attribute
    pub cover: String,
    /// Page background color
    pub background: String,
}

impl Default for PoemConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: None,
            strict: false,
            title: TitleConfig::default(),
            font: "Bookman Old Style".to_string(),
            cover: "ravnenes_saga.jfif".to_string(),
            background: "#fff8dc".to_string(),
        }
    }
}

// =============================================================================
// Title configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleConfig {
    pub artist: String,
    pub song: String,
    pub album: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            artist: "SVARTSOT".to_string(),
            song: "TVENDE RAVNE".to_string(),
            album: "RAVNENES SAGA".to_string(),
        }
    }
}
