//! Line-oriented text builder with indentation tracking.

/// Accumulates generated source text one line at a time.
pub struct CodeWriter {
    buf: String,
    indent_unit: &'static str,
    indent_level: u32,
}

impl CodeWriter {
    /// Creates an empty writer that indents by `indent_unit` per level.
    pub fn new(indent_unit: &'static str) -> Self {
        Self {
            buf: String::new(),
            indent_unit,
            indent_level: 0,
        }
    }

    /// Increases the indentation of subsequent lines.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decreases the indentation of subsequent lines.
    pub fn unindent(&mut self) {
        debug_assert!(self.indent_level > 0, "unbalanced unindent");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Appends one indented line.
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str(self.indent_unit);
        }
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line without trailing indentation.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends `open`, runs `body` one level deeper, then appends `close`.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(open);
        self.indent();
        body(self);
        self.unindent();
        self.line(close);
    }

    /// Returns the accumulated text.
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks() {
        let mut w = CodeWriter::new("  ");
        w.block("class A", "end", |w| {
            w.block("def f", "end", |w| w.line("x"));
            w.blank();
            w.line("y");
        });
        assert_eq!(w.finish(), "class A\n  def f\n    x\n  end\n\n  y\nend\n");
    }

    #[test]
    fn manual_indent() {
        let mut w = CodeWriter::new("\t");
        w.indent();
        w.line("a");
        w.unindent();
        w.line("b");
        assert_eq!(w.finish(), "\ta\nb\n");
    }
}
