//! Text edits shared by the decoration stages.
//!
//! Two kinds of edit exist:
//! - attribute insertion after the first occurrence of a marker token
//! - line splicing right after the page header

/// Number of leading lines (`<html>`, `<body>`) every splice keeps in place.
pub const HEADER_LINES: usize = 2;

/// Append ` attribute` to the first occurrence of `marker`.
///
/// Returns `None` if the marker does not occur. Only the first occurrence is
/// touched, wherever it is.
pub fn add_attribute(text: &str, marker: &str, attribute: &str) -> Option<String> {
    if !text.contains(marker) {
        return None;
    }

    Some(text.replacen(marker, &format!("{marker} {attribute}"), 1))
}

/// Whether the text has a complete header to splice after.
pub fn has_header(text: &str) -> bool {
    text.lines().count() >= HEADER_LINES
}

/// Insert `inserted` lines after the header, keeping everything else verbatim.
///
/// A text shorter than the header gets the lines appended at the end.
pub fn splice_after_header<S: AsRef<str>>(text: &str, inserted: &[S]) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let (header, rest) = lines.split_at(lines.len().min(HEADER_LINES));

    header
        .iter()
        .copied()
        .chain(inserted.iter().map(AsRef::as_ref))
        .chain(rest.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_attribute_first_occurrence_only() {
        assert_eq!(
            add_attribute("<body>\nbody\n</body>", "body", "x=1").unwrap(),
            "<body x=1>\nbody\n</body>"
        );
    }

    #[test]
    fn test_add_attribute_missing_marker() {
        assert_eq!(add_attribute("<p>", "body", "x=1"), None);
    }

    #[test]
    fn test_add_attribute_mis_targets_earlier_content() {
        // Anchoring is purely textual.
        assert_eq!(
            add_attribute("somebody\n<body>", "body", "x=1").unwrap(),
            "somebody x=1\n<body>"
        );
    }

    #[test]
    fn test_splice_after_header() {
        assert_eq!(
            splice_after_header("<html>\n<body>\npoem\n</body>", &["a", "b"]),
            "<html>\n<body>\na\nb\npoem\n</body>"
        );
    }

    #[test]
    fn test_splice_short_text_appends() {
        assert!(!has_header("<html>"));
        assert_eq!(splice_after_header("<html>", &["a"]), "<html>\na");
    }

    #[test]
    fn test_has_header() {
        assert!(has_header("<html>\n<body>"));
        assert!(!has_header(""));
    }
}
