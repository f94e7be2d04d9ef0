//! Owner of every input text of a generator run.

use crate::resolved_span::ResolvedSpan;
use crate::source_file::{SourceFile, STDIN_NAME};
use crate::span::{FileId, Span};
use std::io;
use std::path::{Path, PathBuf};

/// All inputs of one run, addressed by [`FileId`].
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Reads a file from disk and returns its [`FileId`].
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let bytes = std::fs::read(path)?;
        Ok(self.add_source(path, decode(bytes)))
    }

    /// Reads all of `reader` as one input named `<stdin>`.
    pub fn load_reader(&mut self, mut reader: impl io::Read) -> Result<FileId, io::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.add_source(STDIN_NAME, decode(bytes)))
    }

    /// Adds an in-memory input under the given display name.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Returns the input for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Iterates over the loaded inputs in load order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Resolves a [`Span`] to 1-indexed line/column coordinates.
    pub fn resolve_span(&self, span: Span) -> ResolvedSpan {
        let file = self.get_file(span.file);
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end.saturating_sub(1).max(span.start));
        ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_resolve() {
        let mut db = SourceDb::new();
        let id = db.add_source("alu.v", "// alu\nmodule alu(clk, a);\n".to_string());
        let span = Span::new(id, 14, 17);
        let resolved = db.resolve_span(span);
        assert_eq!(resolved.file_path, PathBuf::from("alu.v"));
        assert_eq!((resolved.start_line, resolved.start_col), (2, 8));
        assert_eq!((resolved.end_line, resolved.end_col), (2, 10));
    }

    #[test]
    fn load_reader_is_stdin() {
        let mut db = SourceDb::new();
        let id = db.load_reader("module m(clk);".as_bytes()).unwrap();
        let file = db.get_file(id);
        assert_eq!(file.path, PathBuf::from("<stdin>"));
        assert_eq!(file.content, "module m(clk);");
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.v");
        std::fs::write(&path, "module counter(clk);").unwrap();
        let mut db = SourceDb::new();
        let id = db.load_file(&path).unwrap();
        assert_eq!(db.get_file(id).path, path);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.v");
        std::fs::write(&path, b"// Autor: Jos\xe9\nmodule a(clk, q);\n").unwrap();
        let mut db = SourceDb::new();
        let id = db.load_file(&path).unwrap();
        let file = db.get_file(id);
        assert_eq!(file.content, "// Autor: Jos\u{fffd}\nmodule a(clk, q);\n");
        assert_eq!(file.line_col(file.content.find("module").unwrap() as u32), (2, 1));

        let id = db.load_reader(&b"module b(\xff clk);"[..]).unwrap();
        assert_eq!(db.get_file(id).content, "module b(\u{fffd} clk);");
    }

    #[test]
    fn load_missing_file_errors() {
        let mut db = SourceDb::new();
        assert!(db.load_file(Path::new("/nonexistent/missing.v")).is_err());
    }

    #[test]
    fn ids_follow_load_order() {
        let mut db = SourceDb::new();
        let a = db.add_source("a.v", String::new());
        let b = db.add_source("b.v", String::new());
        assert_eq!(a.as_raw(), 0);
        assert_eq!(b.as_raw(), 1);
        let names: Vec<_> = db.files().map(|f| f.path.clone()).collect();
        assert_eq!(names, vec![PathBuf::from("a.v"), PathBuf::from("b.v")]);
    }
}
