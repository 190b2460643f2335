//! Grammar tables and the statement matcher.
//!
//! A grammar is a `const` slice of [`SyntaxRule`]s. Each rule names a keyword, the kinds of the tokens
//! that follow it, an optional callback and an optional nested grammar selected by a sub-keyword:
//!
//! ```rust
//! use parseconf_syntax::grammar::{CallbackError, ExpectedKind, SyntaxRule};
//! use parseconf_syntax::lexer::Token;
//!
//! #[derive(Default)]
//! struct Settings {
//!     log_file: String,
//! }
//!
//! fn log_file(settings: &mut Settings, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
//!     settings.log_file = tokens[2].text.to_string();
//!     Ok(())
//! }
//!
//! const LOG: &[SyntaxRule<'static, Settings>] =
//!     &[SyntaxRule::new("file", &[ExpectedKind::QSTRING]).with_callback(log_file)];
//!
//! const RULES: &[SyntaxRule<'static, Settings>] =
//!     &[SyntaxRule::new("log", &[ExpectedKind::NESTED]).with_nested(LOG)];
//! ```
//!
//! ## Notes
//! - Rule lookup is a linear, first-match scan. Order rules deliberately when keywords can collide.
//! - The walk over expected kinds stops as soon as either the expected kinds or the tokens run out;
//!   callbacks always receive every token of the statement and may enforce arity themselves.

use std::fmt;

use parseconf_core::ErrorKind;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};


// ============================================================================
// GRAMMAR TYPES
// ============================================================================

/// Error type returned by grammar callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Dispatch target of a rule: receives the user context and every token of the statement.
pub type Callback<U> = fn(&mut U, &[Token<'_>]) -> Result<(), CallbackError>;

/// What a grammar expects at one token position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedKind {
    /// Exactly one token of this kind.
    Exactly(TokenKind),
    /// Every remaining token must be of this kind.
    Rest(TokenKind),
    /// One token of any kind.
    Any,
    /// A bare sub-keyword selecting a rule of the nested grammar.
    Nested,
}

impl ExpectedKind {
    pub const STRING: Self = Self::Exactly(TokenKind::String);
    pub const QSTRING: Self = Self::Exactly(TokenKind::QuotedString);
    pub const NUMBER: Self = Self::Exactly(TokenKind::Number);
    pub const FLOAT: Self = Self::Exactly(TokenKind::Float);
    pub const STRINGS: Self = Self::Rest(TokenKind::String);
    pub const QSTRINGS: Self = Self::Rest(TokenKind::QuotedString);
    pub const NUMBERS: Self = Self::Rest(TokenKind::Number);
    pub const FLOATS: Self = Self::Rest(TokenKind::Float);
    pub const ANY: Self = Self::Any;
    pub const NESTED: Self = Self::Nested;
}

/// How a token is compared against rule keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeywordMatch {
    /// Token text and keyword must be identical.
    #[default]
    Exact,
    /// The keyword only has to start with the token text, so `se` selects a `set` rule.
    ///
    /// Compatibility mode for grammars written against prefix-matching parsers.
    TokenPrefix,
}

impl KeywordMatch {
    pub fn matches(self, keyword: &str, token: &str) -> bool {
        match self {
            KeywordMatch::Exact => keyword == token,
            KeywordMatch::TokenPrefix => keyword.starts_with(token),
        }
    }
}

/// One grammar entry.
pub struct SyntaxRule<'g, U> {
    pub keyword: &'g str,
    pub callback: Option<Callback<U>>,
    pub expected: &'g [ExpectedKind],
    pub nested: Option<&'g [SyntaxRule<'g, U>]>,
}

impl<'g, U> SyntaxRule<'g, U> {
    /// A rule without callback or nested grammar.
    pub const fn new(keyword: &'g str, expected: &'g [ExpectedKind]) -> Self {
        Self {
            keyword,
            callback: None,
            expected,
            nested: None,
        }
    }

    pub const fn with_callback(mut self, callback: Callback<U>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub const fn with_nested(mut self, nested: &'g [SyntaxRule<'g, U>]) -> Self {
        self.nested = Some(nested);
        self
    }
}

impl<U> fmt::Debug for SyntaxRule<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxRule")
            .field("keyword", &self.keyword)
            .field("callback", &self.callback.is_some())
            .field("expected", &self.expected)
            .field("nested", &self.nested)
            .finish()
    }
}

// ============================================================================
// MATCH ERRORS
// ============================================================================

/// A statement that did not resolve or dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (token {position})")]
pub struct MatchError {
    pub kind: ErrorKind,
    /// Index of the offending token within the statement.
    pub position: usize,
    /// Reason given by a failing callback.
    pub message: Option<String>,
}

impl MatchError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The error reported when a token does not have the expected concrete kind.
pub fn expect_error(kind: TokenKind) -> ErrorKind {
    match kind {
        TokenKind::String => ErrorKind::ExpectString,
        TokenKind::QuotedString => ErrorKind::ExpectQuotedString,
        TokenKind::Number => ErrorKind::ExpectNumber,
        TokenKind::Float => ErrorKind::ExpectFloat,
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// The rule a statement resolved to.
pub struct Resolution<'g, U> {
    pub rule: &'g SyntaxRule<'g, U>,
    /// Token index where the walk over expected kinds stopped.
    pub position: usize,
}

impl<U> fmt::Debug for Resolution<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("keyword", &self.rule.keyword)
            .field("position", &self.position)
            .finish()
    }
}

fn find_rule<'g, U>(rules: &'g [SyntaxRule<'g, U>], token: &Token<'_>, keywords: KeywordMatch) -> Option<&'g SyntaxRule<'g, U>> {
    rules.iter().find(|rule| keywords.matches(rule.keyword, token.text))
}

/// Find the rule for a statement and check every token against it, without dispatching.
pub fn resolve<'g, U>(
    rules: &'g [SyntaxRule<'g, U>],
    tokens: &[Token<'_>],
    keywords: KeywordMatch,
) -> Result<Resolution<'g, U>, MatchError> {
    let Some(first) = tokens.first() else {
        return Err(MatchError::new(ErrorKind::Internal, 0));
    };
    if rules.is_empty() {
        return Err(MatchError::new(ErrorKind::Internal, 0));
    }
    if first.kind != TokenKind::String {
        return Err(MatchError::new(ErrorKind::ExpectString, 0));
    }

    let mut rule = find_rule(rules, first, keywords).ok_or_else(|| MatchError::new(ErrorKind::UnknownKeyword, 0))?;
    let mut expected = rule.expected;
    let mut position = 1;

    while let (Some(&want), Some(token)) = (expected.first(), tokens.get(position)) {
        match want {
            ExpectedKind::Nested => {
                let Some(nested) = rule.nested else {
                    return Err(MatchError::new(ErrorKind::NoNestedGrammar, position));
                };
                if token.kind != TokenKind::String {
                    return Err(MatchError::new(ErrorKind::ExpectString, position));
                }
                rule = find_rule(nested, token, keywords)
                    .ok_or_else(|| MatchError::new(ErrorKind::UnknownKeyword, position))?;
                // The sub-keyword is consumed; the nested rule supplies the remaining kinds.
                expected = rule.expected;
            }
            ExpectedKind::Rest(kind) => {
                if let Some(offset) = tokens[position..].iter().position(|t| t.kind != kind) {
                    return Err(MatchError::new(expect_error(kind), position + offset));
                }
                position = tokens.len();
                break;
            }
            // Every lexed token carries a concrete kind.
            ExpectedKind::Any => expected = &expected[1..],
            ExpectedKind::Exactly(kind) => {
                if token.kind != kind {
                    return Err(MatchError::new(expect_error(kind), position));
                }
                expected = &expected[1..];
            }
        }
        position += 1;
    }

    Ok(Resolution { rule, position })
}

/// Resolve a statement and invoke the matched rule's callback.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn match_line<U>(
    rules: &[SyntaxRule<'_, U>],
    tokens: &[Token<'_>],
    user: &mut U,
    keywords: KeywordMatch,
) -> Result<(), MatchError> {
    let Resolution { rule, position } = resolve(rules, tokens, keywords)?;

    let Some(callback) = rule.callback else {
        return Err(MatchError::new(ErrorKind::NoCallback, position));
    };

    tracing::trace!(keyword = rule.keyword, "dispatching statement");
    callback(user, tokens).map_err(|err| MatchError::new(ErrorKind::Callback, position).with_message(err.to_string()))
}
