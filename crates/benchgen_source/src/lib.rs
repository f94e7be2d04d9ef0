//! Input text management and source locations for diagnostics.
//!
//! Every declaration text handed to the generator (named files or standard
//! input) is loaded into a [`SourceDb`]. Scanner results carry [`Span`]s into
//! that database so skipped declarations can be reported with the line and
//! column they came from.

#![warn(missing_docs)]

pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::{FileId, Span};
