//! Error taxonomy for failed statements.
//!
//! Every failure the front end reports carries exactly one [`ErrorKind`]. Kinds fall into three groups:
//! user input errors (`Expect*`, `UnknownKeyword`, `InvalidSyntax`, `TooManyArguments`), grammar table
//! mistakes made by the embedding program (`Internal`, `NoNestedGrammar`, `NoCallback`), and failures
//! raised outside the parser proper (`Callback`, `File`).
//!
//! ## Examples
//! ```rust
//! use parseconf_core::errors::{self, ErrorKind};
//!
//! assert_eq!(errors::code(ErrorKind::ExpectNumber), "parseconf::expect_number");
//! assert_eq!(errors::from_code("parseconf::unknown_keyword"), Some(ErrorKind::UnknownKeyword));
//! ```

use std::fmt;

/// Stable identifier for a failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No tokens or no grammar were handed to the matcher.
    Internal,
    ExpectString,
    ExpectQuotedString,
    ExpectNumber,
    ExpectFloat,
    ExpectAny,
    /// Keyword not found, at the top level or in a nested grammar.
    UnknownKeyword,
    /// A rule asks for a nested keyword but has no nested grammar.
    NoNestedGrammar,
    /// The resolved rule has no callback.
    NoCallback,
    /// The rule's callback rejected the statement.
    Callback,
    /// Opening or reading the input failed.
    File,
    /// A statement holds more tokens than the configured bound.
    TooManyArguments,
    /// Lexically malformed statement.
    InvalidSyntax,
}

/// Who is expected to fix a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
    /// The configuration text is wrong.
    Input,
    /// The grammar table supplied by the program is wrong.
    Grammar,
    /// The environment (file system) or the program's own validation failed.
    External,
}

/// Metadata for an error kind.
#[derive(Debug, Clone, Copy)]
pub struct ErrorKindInfo {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub summary: &'static str,
    pub origin: ErrorOrigin,
}

/// Registry of all error kinds.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    info(
        ErrorKind::Internal,
        "parseconf::internal",
        "no tokens or no grammar rules were supplied",
        ErrorOrigin::Grammar,
    ),
    info(
        ErrorKind::ExpectString,
        "parseconf::expect_string",
        "expected a bare word",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::ExpectQuotedString,
        "parseconf::expect_quoted_string",
        "expected a quoted string",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::ExpectNumber,
        "parseconf::expect_number",
        "expected an integer number",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::ExpectFloat,
        "parseconf::expect_float",
        "expected a floating point number",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::ExpectAny,
        "parseconf::expect_any",
        "expected a word, quoted string or number",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::UnknownKeyword,
        "parseconf::unknown_keyword",
        "unknown keyword",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::NoNestedGrammar,
        "parseconf::no_nested_grammar",
        "rule expects a nested keyword but has no nested grammar",
        ErrorOrigin::Grammar,
    ),
    info(
        ErrorKind::NoCallback,
        "parseconf::no_callback",
        "matched rule has no callback",
        ErrorOrigin::Grammar,
    ),
    info(
        ErrorKind::Callback,
        "parseconf::callback",
        "statement rejected",
        ErrorOrigin::External,
    ),
    info(
        ErrorKind::File,
        "parseconf::file",
        "unable to read input",
        ErrorOrigin::External,
    ),
    info(
        ErrorKind::TooManyArguments,
        "parseconf::too_many_arguments",
        "too many tokens in statement",
        ErrorOrigin::Input,
    ),
    info(
        ErrorKind::InvalidSyntax,
        "parseconf::invalid_syntax",
        "invalid syntax",
        ErrorOrigin::Input,
    ),
];

/// Return the stable diagnostic code for an error kind.
pub fn code(kind: ErrorKind) -> &'static str {
    info_for(kind).code
}

/// Return the one-line summary for an error kind.
pub fn summary(kind: ErrorKind) -> &'static str {
    info_for(kind).summary
}

/// Return who is expected to fix an error kind.
pub fn origin(kind: ErrorKind) -> ErrorOrigin {
    info_for(kind).origin
}

/// Return the full metadata entry for an error kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (this indicates a programming error).
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    ERROR_KINDS
        .iter()
        .find(|e| e.kind == kind)
        .expect("error kind info missing")
}

/// Resolve a diagnostic code back to its error kind.
pub fn from_code(code: &str) -> Option<ErrorKind> {
    ERROR_KINDS.iter().find(|e| e.code == code).map(|e| e.kind)
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        code(self)
    }

    pub fn summary(self) -> &'static str {
        summary(self)
    }

    /// Whether the kind points at a mistake in the grammar table rather than in the input.
    pub fn is_grammar_error(self) -> bool {
        origin(self) == ErrorOrigin::Grammar
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}

const fn info(kind: ErrorKind, code: &'static str, summary: &'static str, origin: ErrorOrigin) -> ErrorKindInfo {
    ErrorKindInfo {
        kind,
        code,
        summary,
        origin,
    }
}
