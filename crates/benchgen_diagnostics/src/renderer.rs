//! Rendering diagnostics for the terminal.

use crate::diagnostic::Diagnostic;
use crate::label::{Label, LabelStyle};
use benchgen_source::{SourceDb, Span};

const RESET: &str = "\x1b[0m";
const BOLD_BLUE: &str = "\x1b[1;34m";

/// Formats diagnostics into output text.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-like layout:
///
/// ```text
/// warning[W101]: skipped malformed module declaration
///   --> rtl/alu.v:3:1
///   |
/// 3 | module alu #(parameter W = f(2)) (input clk);
///   | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ no name or port list recognized
///   = note: ...
/// ```
///
/// Only the first line of a multi-line span is excerpted.
pub struct TerminalRenderer {
    /// Whether to emit ANSI color codes.
    pub color: bool,
    /// Maximum excerpt width; longer source lines are cut.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn render_excerpt(
        &self,
        out: &mut String,
        source_db: &SourceDb,
        span: Span,
        underline: char,
        message: &str,
    ) {
        let file = source_db.get_file(span.file);
        let (line, col) = file.line_col(span.start);
        let text = file.line_text(span.start);
        let shown: String = text.chars().take(self.width as usize).collect();

        let line_num = line.to_string();
        let gutter = " ".repeat(line_num.len());
        let bar = self.paint(BOLD_BLUE, "|");

        let remaining = text.len().saturating_sub(col as usize - 1);
        let mark_len = (span.len() as usize).min(remaining).max(1);
        let marks: String = std::iter::repeat(underline).take(mark_len).collect();
        let pad = " ".repeat(col as usize - 1);
        let suffix = if message.is_empty() {
            String::new()
        } else {
            format!(" {message}")
        };

        out.push_str(&format!("{gutter} {bar}\n"));
        out.push_str(&format!("{} {bar} {shown}\n", self.paint(BOLD_BLUE, &line_num)));
        out.push_str(&format!("{gutter} {bar} {pad}{marks}{suffix}\n"));
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();

        let head = format!("{}[{}]", diag.severity, diag.code);
        out.push_str(&format!(
            "{}: {}\n",
            self.paint(diag.severity.ansi_color(), &head),
            diag.message
        ));

        if !diag.primary_span.is_dummy() {
            let resolved = source_db.resolve_span(diag.primary_span);
            out.push_str(&format!("  --> {resolved}\n"));

            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map_or("", |l| l.message.as_str());
            self.render_excerpt(&mut out, source_db, diag.primary_span, '^', primary_msg);

            for label in diag
                .labels
                .iter()
                .filter(|l| l.style == LabelStyle::Secondary && !l.span.is_dummy())
            {
                render_secondary(self, &mut out, source_db, label);
            }
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

fn render_secondary(renderer: &TerminalRenderer, out: &mut String, db: &SourceDb, label: &Label) {
    out.push_str(&format!("  ::: {}\n", db.resolve_span(label.span)));
    renderer.render_excerpt(out, db, label.span, label.underline_char(), &label.message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{DUPLICATE_MODULE, MALFORMED_DECLARATION, UNTERMINATED_COMMENT};

    #[test]
    fn render_warning_with_span() {
        let mut db = SourceDb::new();
        let src = "// header\nmodule (clk);\n";
        let id = db.add_source("bad.v", src.to_string());
        let span = Span::new(id, 10, 23);
        let diag = Diagnostic::warning(MALFORMED_DECLARATION, "skipped declaration", span)
            .with_label(Label::primary(span, "no module name"));

        let out = TerminalRenderer::new(false, 80).render(&diag, &db);
        assert!(out.contains("warning[W101]: skipped declaration"));
        assert!(out.contains("--> bad.v:2:1"));
        assert!(out.contains("2 | module (clk);"));
        assert!(out.contains("^^^^^^^^^^^^^ no module name"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn underline_clipped_to_first_line() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.v", "/* open\nstill open".to_string());
        let span = Span::new(id, 0, 18);
        let diag = Diagnostic::warning(UNTERMINATED_COMMENT, "unterminated", span);
        let out = TerminalRenderer::new(false, 80).render(&diag, &db);
        let underline = out.lines().find(|l| l.contains('^')).unwrap();
        assert_eq!(underline.matches('^').count(), "/* open".len());
    }

    #[test]
    fn secondary_label_rendered() {
        let mut db = SourceDb::new();
        let id = db.add_source("dup.v", "module m(clk);\nmodule m(clk);\n".to_string());
        let second = Span::new(id, 15, 29);
        let first = Span::new(id, 0, 14);
        let diag = Diagnostic::warning(DUPLICATE_MODULE, "module `m` declared twice", second)
            .with_label(Label::secondary(first, "first declared here"));
        let out = TerminalRenderer::new(false, 80).render(&diag, &db);
        assert!(out.contains("--> dup.v:2:1"));
        assert!(out.contains("::: dup.v:1:1"));
        assert!(out.contains("-------------- first declared here"));
    }

    #[test]
    fn dummy_span_has_no_excerpt() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(MALFORMED_DECLARATION, "general", Span::DUMMY)
            .with_note("a note")
            .with_help("a hint");
        let out = TerminalRenderer::new(false, 80).render(&diag, &db);
        assert!(!out.contains("-->"));
        assert!(out.contains("= note: a note"));
        assert!(out.contains("= help: a hint"));
    }

    #[test]
    fn color_wraps_header() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(MALFORMED_DECLARATION, "colored", Span::DUMMY);
        let out = TerminalRenderer::new(true, 80).render(&diag, &db);
        assert!(out.starts_with("\x1b[1;33mwarning[W101]\x1b[0m: colored"));
    }
}
