//! One loaded input with a line index for line/column lookup.

use crate::span::FileId;
use std::path::PathBuf;

/// Name under which standard input is recorded.
pub const STDIN_NAME: &str = "<stdin>";

/// An input text loaded into the [`SourceDb`](crate::SourceDb).
pub struct SourceFile {
    /// The identifier of this input.
    pub id: FileId,
    /// The path it was read from, or [`STDIN_NAME`].
    pub path: PathBuf,
    /// The full text.
    pub content: String,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile`, indexing its line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| (i + 1) as u32),
            )
            .collect();
        Self {
            id,
            path,
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed `(line, column)`.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = line_idx as u32 + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text of the line containing `byte_offset`, without its
    /// line terminator.
    pub fn line_text(&self, byte_offset: u32) -> &str {
        let (line, _) = self.line_col(byte_offset);
        let start = self.line_starts[line as usize - 1] as usize;
        let end = self
            .line_starts
            .get(line as usize)
            .map_or(self.content.len(), |&next| next as usize);
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new(FileId::from_raw(0), PathBuf::from("top.v"), content.to_string())
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("module a;\nendmodule\nmodule b;");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(10), (2, 1));
        assert_eq!(f.line_col(13), (2, 4));
        assert_eq!(f.line_col(20), (3, 1));
    }

    #[test]
    fn line_text_strips_terminator() {
        let f = make_file("module a;\r\nendmodule\n");
        assert_eq!(f.line_text(3), "module a;");
        assert_eq!(f.line_text(12), "endmodule");
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_text(0), "");
    }
}
