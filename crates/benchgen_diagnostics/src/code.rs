//! Diagnostic codes with category prefixes.

use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// Errors, prefixed with `E`.
    Error,
    /// Warnings, prefixed with `W`.
    Warning,
    /// Informational notes, prefixed with `N`.
    Note,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Note => 'N',
        }
    }
}

/// A category prefix plus a number, displayed as e.g. `W101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The number within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// A `module` keyword was found but no declaration could be recognized
/// after it; the text is skipped.
pub const MALFORMED_DECLARATION: DiagnosticCode = DiagnosticCode::new(Category::Warning, 101);

/// A block comment is never closed; the rest of the input is ignored.
pub const UNTERMINATED_COMMENT: DiagnosticCode = DiagnosticCode::new(Category::Warning, 102);

/// A declaration has an empty port list, so no clock signal can be inferred.
pub const NO_CLOCK_PORT: DiagnosticCode = DiagnosticCode::new(Category::Warning, 103);

/// Two declarations share a module name; the later one overwrites the
/// earlier one's artifacts.
pub const DUPLICATE_MODULE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 104);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Error.prefix(), 'E');
        assert_eq!(Category::Warning.prefix(), 'W');
        assert_eq!(Category::Note.prefix(), 'N');
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(DiagnosticCode::new(Category::Note, 7).to_string(), "N007");
        assert_eq!(MALFORMED_DECLARATION.to_string(), "W101");
        assert_eq!(DUPLICATE_MODULE.to_string(), "W104");
    }
}
