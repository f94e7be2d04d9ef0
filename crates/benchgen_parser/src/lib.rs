//! Lenient recognizer for flat Verilog module declarations.
//!
//! The generator only needs a module's name, its parameter list and its port
//! list, so instead of a grammar this crate runs two stages:
//!
//! - **Scanner** ([`scanner`]): blanks comments and line breaks and yields each
//!   `module ... ;` substring with its source span.
//! - **Parser** ([`parser`]): matches one substring against a header pattern
//!   and builds a frozen [`ModuleDescriptor`].
//!
//! Declarations that cannot be recognized are reported to the
//! [`DiagnosticSink`] as warnings and skipped; the remaining declarations are
//! still returned.

#![warn(missing_docs)]

pub mod ast;
pub mod parser;
pub mod scanner;

pub use ast::{ModuleDescriptor, ParameterDeclaration, PortDeclaration, PortDirection};
pub use parser::{parse_declaration, DeclarationError};
pub use scanner::{scan, Declaration, Scanner};

use benchgen_diagnostics::code::{
    DUPLICATE_MODULE, MALFORMED_DECLARATION, NO_CLOCK_PORT, UNTERMINATED_COMMENT,
};
use benchgen_diagnostics::{Diagnostic, DiagnosticSink, Label};
use benchgen_source::{FileId, SourceDb, Span};
use std::collections::HashMap;

/// A descriptor together with the span of the declaration it came from.
#[derive(Clone, Debug)]
pub struct RecognizedModule {
    /// The parsed declaration.
    pub module: ModuleDescriptor,
    /// Where the declaration appears in its input.
    pub span: Span,
}

/// Scans and parses every declaration of one input, in source order.
pub fn parse_file(
    file_id: FileId,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) -> Vec<RecognizedModule> {
    let file = source_db.get_file(file_id);
    let scanner = scan(file_id, &file.content);

    if let Some(offset) = scanner.unterminated_comment() {
        let span = Span::from_range(file_id, offset..offset + 2);
        sink.emit(
            Diagnostic::warning(UNTERMINATED_COMMENT, "unterminated block comment", span)
                .with_label(Label::primary(span, "comment opened here is never closed"))
                .with_note("the rest of the input is ignored"),
        );
    }

    let mut modules = Vec::new();
    for decl in scanner {
        match parse_declaration(&decl.text) {
            Ok(module) => {
                log::debug!("recognized module `{}` at {:?}", module.name(), decl.span);
                if module.ports().is_empty() {
                    sink.emit(
                        Diagnostic::warning(
                            NO_CLOCK_PORT,
                            format!("module `{}` has no ports", module.name()),
                            decl.span,
                        )
                        .with_label(Label::primary(decl.span, "empty port list"))
                        .with_note("the harness clocks the first port, so no signal will toggle"),
                    );
                }
                modules.push(RecognizedModule {
                    module,
                    span: decl.span,
                });
            }
            Err(err) => {
                log::debug!("skipping declaration at {:?}: {err}", decl.span);
                let mut diag = Diagnostic::warning(
                    MALFORMED_DECLARATION,
                    "skipped unrecognized module declaration",
                    decl.span,
                )
                .with_label(Label::primary(decl.span, err.to_string()));
                if matches!(err, DeclarationError::Malformed(_)) {
                    diag = diag.with_note(
                        "only flat `module NAME #(PARAMS) (PORTS);` headers are recognized",
                    );
                }
                sink.emit(diag);
            }
        }
    }
    modules
}

/// Parses every input of `source_db` in load order.
///
/// A module name recognized more than once is reported, since the later
/// declaration's artifacts replace the earlier one's.
pub fn parse_all(source_db: &SourceDb, sink: &DiagnosticSink) -> Vec<RecognizedModule> {
    let mut modules = Vec::new();
    let mut seen: HashMap<String, Span> = HashMap::new();
    for file in source_db.files() {
        for recognized in parse_file(file.id, source_db, sink) {
            let name = recognized.module.name().to_string();
            if let Some(&first) = seen.get(&name) {
                sink.emit(
                    Diagnostic::warning(
                        DUPLICATE_MODULE,
                        format!("module `{name}` is declared more than once"),
                        recognized.span,
                    )
                    .with_label(Label::primary(recognized.span, "declared again here"))
                    .with_label(Label::secondary(first, "first declared here"))
                    .with_help("both declarations write to the same output files"),
                );
            } else {
                seen.insert(name, recognized.span);
            }
            modules.push(recognized);
        }
    }
    modules
}
