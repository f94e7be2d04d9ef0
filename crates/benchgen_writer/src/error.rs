//! Error types for artifact writing.

use std::path::{Path, PathBuf};

/// Errors that abort a generator run while reconciling artifacts on disk.
///
/// Merge tool failures are not represented here: they are logged and the run
/// continues.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Reading, copying or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl WriteError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = WriteError::io(
            Path::new("out/counter_test_spec.rb"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("counter_test_spec.rb"));
        assert!(msg.contains("permission denied"));
    }
}
