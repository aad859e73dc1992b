//! Query normalization and substring matching.

use crate::model::note::Note;

/// Normalizes a raw query: trim, then case-fold.
///
/// Returns `None` for blank input so callers can short-circuit to the
/// unfiltered collection.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Returns whether the note's title or content contains the query.
///
/// `query` must already be normalized via [`normalize_query`].
pub fn note_matches(note: &Note, query: &str) -> bool {
    note.title.to_lowercase().contains(query) || note.content.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::{normalize_query, note_matches};
    use crate::model::note::{Note, NoteColor};

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  AlPhA "), Some("alpha".to_string()));
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t"), None);
    }

    #[test]
    fn note_matches_title_and_content_case_insensitively() {
        let note = Note::new("Alpha", "Release CHECKLIST", NoteColor::Blue);

        assert!(note_matches(&note, "al"));
        assert!(note_matches(&note, "checklist"));
        assert!(!note_matches(&note, "beta"));
    }
}
