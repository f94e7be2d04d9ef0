//! Shared foundational types used across the benchgen workspace.
//!
//! This crate provides the content fingerprint used to detect unchanged
//! artifacts and the closed set of specification styles a bench can be
//! generated for.

#![warn(missing_docs)]

pub mod hash;
pub mod style;

pub use hash::ContentHash;
pub use style::{SpecStyle, StyleParseError};
