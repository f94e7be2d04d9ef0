//! Content fingerprints for change detection of generated artifacts.

use sha2::{Digest, Sha256};
use std::fmt;

/// A SHA-256 content fingerprint.
///
/// Two byte sequences with the same `ContentHash` are treated as identical.
/// The writer compares the fingerprint of freshly rendered text against the
/// fingerprint of the file already on disk to decide between skipping and
/// updating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Computes the SHA-256 digest of a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(data));
        Self(out)
    }

    /// Computes a fingerprint of UTF-8 text.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
