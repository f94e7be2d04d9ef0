//! Change-aware writing of generated artifacts.
//!
//! Each artifact is compared against the file already on disk by content
//! fingerprint. Missing files are created, identical files are skipped, and
//! differing files are never overwritten: the old content is preserved as a
//! `.old` sibling, the fresh content lands in a `.new` sibling, and an
//! optional external [`MergeTool`] reconciles the two into the live file.

#![warn(missing_docs)]

pub mod error;
pub mod hasher;
pub mod merge;
pub mod writer;

pub use error::WriteError;
pub use hasher::FileHasher;
pub use merge::MergeTool;
pub use writer::{sibling, ArtifactWriter, WriteAction};
