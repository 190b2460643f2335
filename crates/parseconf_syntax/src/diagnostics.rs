//! Structured diagnostics for failed statements.
//!
//! [`ParseError`] is the one error value the line driver hands to reporters and returns to callers. It
//! carries the failure category, where it happened (line, token index, byte span within the whole
//! input) and, for file failures, the underlying I/O error.
//!
//! `ParseError` implements [`miette::Diagnostic`], so a front end can render it against the input with
//! `miette::Report::new(err).with_source_code(NamedSource::new(name, text))`.

use std::fmt;
use std::io;

use miette::{Diagnostic, LabeledSpan};
use parseconf_core::{ErrorKind, Status};

use crate::grammar::MatchError;
use crate::lexer::{LexError, Span, Token};

/// A statement (or the input itself) that could not be processed.
#[derive(Debug)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 1-based line number; 0 when the input could not be opened.
    pub line: usize,
    /// Index of the offending token within its statement.
    pub token: usize,
    /// Detail beyond the kind summary (lexer reason, callback message, I/O error text).
    pub message: Option<String>,
    /// Byte range within the whole input.
    pub span: Option<Span>,
    source: Option<io::Error>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            token: 0,
            message: None,
            span: None,
            source: None,
        }
    }

    pub fn with_token(mut self, token: usize) -> Self {
        self.token = token;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// A lexer failure on `line_text`, which starts at byte `line_offset` of the input.
    ///
    /// `scanned` is the number of tokens of the statement scanned before the failure.
    pub fn from_lex(err: &LexError, line: usize, scanned: usize, line_text: &str, line_offset: usize) -> Self {
        let start = err.offset().min(line_text.len());
        let end = (start + 1).min(line_text.len());
        Self::new(err.kind(), line)
            .with_token(scanned)
            .with_message(err.to_string())
            .with_span(Span::new(start, end).shifted(line_offset))
    }

    /// A matcher failure for `tokens`, whose spans are relative to a line starting at `line_offset`.
    ///
    /// Failures past the last token (missing callback, rejected statement) cover the whole statement.
    pub fn from_match(err: MatchError, line: usize, tokens: &[Token<'_>], line_offset: usize) -> Self {
        let span = match tokens.get(err.position) {
            Some(token) => Some(token.span),
            None => match (tokens.first(), tokens.last()) {
                (Some(first), Some(last)) => Some(Span::new(first.span.start, last.span.end)),
                _ => None,
            },
        };

        let mut error = Self::new(err.kind, line).with_token(err.position);
        error.message = err.message;
        error.span = span.map(|span| span.shifted(line_offset));
        error
    }

    /// Opening or reading the input failed.
    pub fn io(err: io::Error, line: usize) -> Self {
        let mut error = Self::new(ErrorKind::File, line).with_message(err.to_string());
        error.source = Some(err);
        error
    }

    /// The I/O error behind a [`ErrorKind::File`] failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.as_ref()
    }

    /// Result code for this failure. Every parse failure reports the generic error code.
    pub fn status(&self) -> Status {
        Status::Error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.kind.summary())?;
        } else {
            write!(f, "line {}, token {}: {}", self.line, self.token, self.kind.summary())?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.summary()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let label = self.message.clone().unwrap_or_else(|| self.kind.summary().to_string());
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(label),
            span.start,
            span.len(),
        ))))
    }
}
