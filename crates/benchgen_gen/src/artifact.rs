//! The six artifact kinds generated per module.

use std::fmt;
use std::path::PathBuf;

/// One generated file kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ArtifactKind {
    /// Build/run script (`.rake`).
    Runner,
    /// Verilog harness (`.v`).
    VerilogBench,
    /// Host-language harness (`.rb`).
    RubyBench,
    /// Interface adapter exposing each port (`.rb`).
    Design,
    /// Behavioral stand-in for the module (`.rb`).
    Proto,
    /// Specification stub (`.rb`).
    Spec,
}

impl ArtifactKind {
    /// Every kind in write order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Runner,
        ArtifactKind::VerilogBench,
        ArtifactKind::RubyBench,
        ArtifactKind::Design,
        ArtifactKind::Proto,
        ArtifactKind::Spec,
    ];

    /// Short name used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Runner => "runner",
            ArtifactKind::VerilogBench => "verilog bench",
            ArtifactKind::RubyBench => "ruby bench",
            ArtifactKind::Design => "design",
            ArtifactKind::Proto => "proto",
            ArtifactKind::Spec => "spec",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final text of one artifact, ready for the writer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedArtifact {
    /// Which template produced the text.
    pub kind: ArtifactKind,
    /// File name relative to the output directory.
    pub path: PathBuf,
    /// Rendered content.
    pub content: String,
}
