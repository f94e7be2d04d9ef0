//! Spans resolved to the line/column coordinates shown to users.

use std::fmt;
use std::path::PathBuf;

/// A [`Span`](crate::Span) resolved against its input. Lines and columns are
/// 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path (or `<stdin>`) of the input.
    pub file_path: PathBuf,
    /// First line covered.
    pub start_line: u32,
    /// Column of the first byte.
    pub start_col: u32,
    /// Last line covered.
    pub end_line: u32,
    /// Column of the last byte.
    pub end_col: u32,
}

impl ResolvedSpan {
    /// Returns `true` if the span crosses a line break. Declarations often
    /// do, since a port list is usually one port per line.
    pub fn is_multiline(&self) -> bool {
        self.start_line != self.end_line
    }
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start_line: u32, end_line: u32) -> ResolvedSpan {
        ResolvedSpan {
            file_path: PathBuf::from("rtl/counter.v"),
            start_line,
            start_col: 3,
            end_line,
            end_col: 9,
        }
    }

    #[test]
    fn display_shows_start() {
        assert_eq!(span(4, 9).to_string(), "rtl/counter.v:4:3");
    }

    #[test]
    fn multiline() {
        assert!(span(4, 9).is_multiline());
        assert!(!span(4, 4).is_multiline());
    }
}
