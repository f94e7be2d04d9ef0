//! Diagnostics for problems found in declaration input.
//!
//! Input problems never abort a run. They are emitted as [`Diagnostic`]s into
//! a [`DiagnosticSink`] while the pipeline carries on with the next
//! declaration, and the binary renders them with [`TerminalRenderer`] once the
//! inputs have been scanned.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
