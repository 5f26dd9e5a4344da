//! Printable-character helpers for tstable.
//!
//! A character is printable when it is a letter, mark, number, punctuation or
//! symbol, or the ASCII space. Control, format, surrogate, private-use and
//! unassigned codepoints and all other separators are not printable.

use thiserror::Error;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Printable helper errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintableError {
    /// The collection to check was empty.
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },
}

/// Result type for printable helpers.
pub type Result<T> = std::result::Result<T, PrintableError>;

/// Returns true if `c` is printable.
pub fn is_printable_char(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Returns `s` with all non-printable characters dropped.
pub fn printable(s: &str) -> String {
    s.chars().filter(|&c| is_printable_char(c)).collect()
}

/// Returns true if every string in `strings` consists of printable characters only.
///
/// Fails with [`PrintableError::EmptyInput`] if `strings` is empty.
pub fn is_printable<S: AsRef<str>>(strings: &[S]) -> Result<bool> {
    if strings.is_empty() {
        return Err(PrintableError::EmptyInput {
            what: "slice of strings",
        });
    }
    Ok(strings
        .iter()
        .all(|s| s.as_ref().chars().all(is_printable_char)))
}

/// Returns `c` as a one-character string if it is printable, else an empty string.
pub fn rune_to_printable(c: char) -> String {
    if is_printable_char(c) {
        c.to_string()
    } else {
        String::new()
    }
}
