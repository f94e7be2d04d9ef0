//! Declaration scanner: finds flat module declarations in raw source text.
//!
//! Comments, string literal contents and line breaks are replaced by spaces
//! of the same byte length instead of being removed, so every offset in the
//! cleaned buffer is also an offset into the original text. Block comments do
//! not nest: the first `*/` closes the comment.

use benchgen_source::{FileId, Span};
use once_cell::sync::Lazy;
use regex::Regex;

static MODULE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmodule\b").unwrap());

/// Text with comments blanked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// One-line buffer, byte-for-byte aligned with the input.
    pub text: String,
    /// Byte offset of a block comment that is never closed.
    pub unterminated_comment: Option<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str,
    LineComment,
    BlockComment,
}

fn push_blank(out: &mut String, c: char) {
    for _ in 0..c.len_utf8() {
        out.push(' ');
    }
}

fn push_code(out: &mut String, c: char) {
    match c {
        '\n' | '\r' => out.push(' '),
        _ => out.push(c),
    }
}

/// Blanks `//` and `/* */` comments, the contents of string literals, and
/// line breaks in a single pass.
pub fn blank_comments(source: &str) -> CleanedText {
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut block_start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match state {
            State::Code => match (c, next) {
                ('/', Some('/')) => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    out.push_str("  ");
                    block_start = i;
                    state = State::BlockComment;
                }
                ('"', _) => {
                    out.push('"');
                    state = State::Str;
                }
                _ => push_code(&mut out, c),
            },
            State::Str => match c {
                '\\' => {
                    push_blank(&mut out, c);
                    if let Some((_, escaped)) = chars.next() {
                        push_blank(&mut out, escaped);
                    }
                }
                '"' => {
                    out.push('"');
                    state = State::Code;
                }
                '\n' | '\r' => {
                    out.push(' ');
                    state = State::Code;
                }
                _ => push_blank(&mut out, c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
                push_blank(&mut out, c);
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    push_blank(&mut out, c);
                }
            }
        }
    }

    CleanedText {
        text: out,
        unterminated_comment: (state == State::BlockComment).then_some(block_start),
    }
}

/// One declaration candidate: from a `module` keyword through the first
/// following semicolon, or to the end of input if there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Cleaned declaration text.
    pub text: String,
    /// Location in the original input.
    pub span: Span,
}

/// Lazily yields the declarations of one input in source order.
pub struct Scanner {
    file: FileId,
    cleaned: CleanedText,
    pos: usize,
}

impl Scanner {
    /// Prepares `source` for scanning.
    pub fn new(file: FileId, source: &str) -> Self {
        Self {
            file,
            cleaned: blank_comments(source),
            pos: 0,
        }
    }

    /// Byte offset of an unclosed block comment, if the input has one.
    pub fn unterminated_comment(&self) -> Option<usize> {
        self.cleaned.unterminated_comment
    }
}

impl Iterator for Scanner {
    type Item = Declaration;

    fn next(&mut self) -> Option<Declaration> {
        let text = &self.cleaned.text;
        let start = MODULE_KEYWORD.find_at(text, self.pos)?.start();
        let end = text[start..]
            .find(';')
            .map_or(text.len(), |semi| start + semi + 1);
        self.pos = end;
        Some(Declaration {
            text: text[start..end].to_string(),
            span: Span::from_range(self.file, start..end),
        })
    }
}

/// Scans `source` for declarations.
pub fn scan(file: FileId, source: &str) -> Scanner {
    Scanner::new(file, source)
}
