//! File identifiers and byte ranges within loaded inputs.

/// Opaque identifier for an input loaded into the [`SourceDb`](crate::SourceDb).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FileId(u32);

impl FileId {
    /// Identifier used by spans that do not point into any loaded input.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from its raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index of this `FileId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// A half-open byte range `[start, end)` within one input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    /// The input this span points into.
    pub file: FileId,
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
}

impl Span {
    /// A span that has no location, for diagnostics about the run itself.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a new span in `file` covering `start..end`.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Creates a span from a `usize` byte range, as produced by string and
    /// regex matching.
    pub fn from_range(file: FileId, range: std::ops::Range<usize>) -> Self {
        Self::new(file, range.start as u32, range.end as u32)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the location-less span.
    pub fn is_dummy(&self) -> bool {
        self.file == FileId::DUMMY
    }
}
