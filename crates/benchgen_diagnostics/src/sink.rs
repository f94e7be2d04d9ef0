//! Accumulator for diagnostics emitted while scanning and parsing.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::cell::{Cell, RefCell};

/// Collects diagnostics in emission order.
///
/// The generator pipeline is strictly sequential, so the sink uses interior
/// mutability without locking; components take `&DiagnosticSink`.
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
    error_count: Cell<usize>,
    warning_count: Cell<usize>,
    deny_warnings: bool,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            error_count: Cell::new(0),
            warning_count: Cell::new(0),
            deny_warnings: false,
        }
    }

    /// Creates a sink that records every warning as an error.
    pub fn denying_warnings() -> Self {
        Self {
            deny_warnings: true,
            ..Self::new()
        }
    }

    /// Records a diagnostic.
    pub fn emit(&self, mut diag: Diagnostic) {
        if self.deny_warnings && diag.severity == Severity::Warning {
            diag.severity = Severity::Error;
        }
        match diag.severity {
            Severity::Error => self.error_count.set(self.error_count.get() + 1),
            Severity::Warning => self.warning_count.set(self.warning_count.get() + 1),
            Severity::Note => {}
        }
        self.diagnostics.borrow_mut().push(diag);
    }

    /// Returns `true` if any error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.get() > 0
    }

    /// Number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    /// Number of warnings emitted so far.
    pub fn warning_count(&self) -> usize {
        self.warning_count.get()
    }

    /// Removes and returns every diagnostic emitted so far. Counts are kept.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Returns a copy of every diagnostic emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
