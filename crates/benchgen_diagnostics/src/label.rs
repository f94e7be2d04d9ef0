//! Labels annotating source spans within a diagnostic.

use benchgen_source::Span;

/// Whether a label marks the main location or adds context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelStyle {
    /// Underlined with `^`.
    Primary,
    /// Underlined with `-`.
    Secondary,
}

/// A span with a short message rendered under it.
#[derive(Clone, Debug)]
pub struct Label {
    /// The annotated span.
    pub span: Span,
    /// Text shown next to the underline.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }

    /// The character used to underline this label.
    pub fn underline_char(&self) -> char {
        match self.style {
            LabelStyle::Primary => '^',
            LabelStyle::Secondary => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_style() {
        let p = Label::primary(Span::DUMMY, "skipped");
        let s = Label::secondary(Span::DUMMY, "first declared here");
        assert_eq!(p.style, LabelStyle::Primary);
        assert_eq!(p.underline_char(), '^');
        assert_eq!(s.style, LabelStyle::Secondary);
        assert_eq!(s.underline_char(), '-');
        assert_eq!(s.message, "first declared here");
    }
}
