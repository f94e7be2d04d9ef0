//! Content fingerprints of files on disk.

use std::io::ErrorKind;
use std::path::Path;

use benchgen_common::ContentHash;

use crate::error::WriteError;

/// Computes fingerprints for change detection.
pub struct FileHasher;

impl FileHasher {
    /// Returns the SHA-256 fingerprint of the file at `path`, or `None` if
    /// no file exists there.
    pub fn hash_file(path: &Path) -> Result<Option<ContentHash>, WriteError> {
        match std::fs::read(path) {
            Ok(content) => Ok(Some(ContentHash::from_bytes(&content))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WriteError::io(path, e)),
        }
    }

    /// Returns the fingerprint of freshly rendered content.
    pub fn hash_content(content: &str) -> ContentHash {
        ContentHash::from_text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_no_hash() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileHasher::hash_file(&dir.path().join("absent.rb"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn file_hash_matches_content_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.v");
        std::fs::write(&path, "module a;\n").unwrap();
        assert_eq!(
            FileHasher::hash_file(&path).unwrap(),
            Some(FileHasher::hash_content("module a;\n"))
        );
        assert_ne!(
            FileHasher::hash_file(&path).unwrap(),
            Some(FileHasher::hash_content("module b;\n"))
        );
    }

    #[test]
    fn directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileHasher::hash_file(dir.path()).is_err());
    }
}
