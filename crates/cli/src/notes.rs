//! Notes source resolution.
//!
//! A profile's `notes` value names a local file when one exists at that
//! path; otherwise it is the notes text itself. The result is always an
//! HTML `<body>` envelope, which is what Asana's `html_notes` expects.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

/// Reads the notes named by `notes` and wraps them in `<body>…</body>`.
///
/// # Errors
///
/// [`ConfigError::NotesUnreadable`] if `notes` is an existing file that
/// cannot be read as UTF-8 text.
pub fn get_notes_content(notes: &str) -> Result<String, ConfigError> {
    let path = Path::new(notes);
    let content = if path.is_file() {
        debug!(path = %path.display(), "reading notes from file");
        fs::read_to_string(path).map_err(|source| ConfigError::NotesUnreadable {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        notes.to_owned()
    };

    Ok(wrap_body(content))
}

/// Wraps `content` in `<body>…</body>` unless, ignoring surrounding
/// whitespace, it already starts with `<body>`.
pub fn wrap_body(content: String) -> String {
    if content.trim().starts_with("<body>") {
        content
    } else {
        format!("<body>{content}</body>")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn literal_text_is_wrapped() {
        assert_eq!(get_notes_content("Hi").expect("literal"), "<body>Hi</body>");
    }

    #[test]
    fn file_contents_are_read_and_wrapped() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "Line one\nLine two").expect("write notes");
        let path = file.path().to_str().expect("utf-8 temp path");

        let notes = get_notes_content(path).expect("notes file");

        assert_eq!(notes, "<body>Line one\nLine two</body>");
    }

    #[test]
    fn already_wrapped_file_is_kept_verbatim() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "\n  <body>Hi @[Ann]</body>\n").expect("write notes");
        let path = file.path().to_str().expect("utf-8 temp path");

        let notes = get_notes_content(path).expect("notes file");

        assert_eq!(notes, "\n  <body>Hi @[Ann]</body>\n");
    }

    #[rstest]
    #[case::plain("Hi")]
    #[case::empty("")]
    #[case::padded_body("  <body>x</body>  ")]
    #[case::body_later("intro <body>x</body>")]
    fn wrapping_is_idempotent(#[case] content: &str) {
        let once = wrap_body(content.to_owned());
        let twice = wrap_body(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn directory_path_is_treated_as_literal_text() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().to_str().expect("utf-8 temp path");

        let notes = get_notes_content(path).expect("directory is not a notes file");

        assert_eq!(notes, format!("<body>{path}</body>"));
    }
}
