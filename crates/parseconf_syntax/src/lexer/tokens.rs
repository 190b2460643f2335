//! Token types for the parseconf tokenizer.
//!
//! ## Notes
//! - A [`Token`] borrows its text from the line it was scanned from; it cannot outlive that line.
//! - Quoted strings keep their content verbatim; the quotes are outside `text` and `span`.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Concrete kind of a lexed token. Decided once, at tokenization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare word (anything that is not purely numeric).
    String,
    /// `"..."`, quotes stripped.
    QuotedString,
    /// Decimal digits only.
    Number,
    /// Decimal digits with exactly one `.`.
    Float,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::String => "String",
            TokenKind::QuotedString => "QuotedString",
            TokenKind::Number => "Number",
            TokenKind::Float => "Float",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range within the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move the span by `offset` bytes (line-relative to input-relative).
    pub fn shifted(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// A classified token borrowing its text from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}
