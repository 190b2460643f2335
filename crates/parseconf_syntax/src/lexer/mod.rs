//! Tokenizer for parseconf configuration lines.
//!
//! A line holds zero or more statements. A statement is a sequence of tokens separated by a single
//! space or tab and terminated by `;` (or cut short by a `#` comment):
//!
//! ```text
//! log file "out.txt"; level 3;   # two statements, then a comment
//! ```
//!
//! Token classification happens while scanning:
//! - `"..."` is a quoted string (content taken verbatim, no escapes);
//! - digits only is a number, digits with one `.` a float;
//! - anything else is a bare string.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Span)

pub mod tokens;

pub use tokens::{Span, Token, TokenKind};

use parseconf_core::ErrorKind;
use parseconf_core::lang::delimiters::{self, COMMENT, DECIMAL_POINT, QUOTE, TERMINATOR};
use thiserror::Error;

/// Default bound on the number of tokens in one statement.
pub const MAX_TOKENS: usize = 64;

// ============================================================================
// SCAN RESULTS
// ============================================================================

/// Outcome of scanning one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    /// Token followed by a separator; the statement continues.
    More(Token<'a>),
    /// Token followed by `;`; the statement is complete.
    Last(Token<'a>),
    /// A `#` at a token start; the rest of the line is ignored.
    Comment,
    /// No token starts here (separator, terminator, line end or end of input).
    Boundary,
}

/// How a scanned statement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementEnd {
    /// Only blanks (or nothing) were left on the line.
    Blank,
    /// A comment ended the line.
    Comment,
    /// `;` ended the statement; more statements may follow on the line.
    Terminator,
}

/// Tokens of one statement together with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub tokens: Vec<Token<'a>>,
    pub end: StatementEnd,
}

/// Lexically malformed input. Offsets are byte positions within the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected separator")]
    UnexpectedSeparator { offset: usize },

    #[error("statement is not terminated by ';'")]
    Unterminated { offset: usize },

    #[error("unterminated quoted string")]
    UnterminatedQuote { offset: usize },

    #[error("malformed quoted token")]
    MalformedQuoted { offset: usize },

    #[error("second decimal point in number")]
    SecondDecimalPoint { offset: usize },

    #[error("more than {max} tokens in one statement")]
    TooManyTokens { max: usize, offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match *self {
            LexError::UnexpectedSeparator { offset }
            | LexError::Unterminated { offset }
            | LexError::UnterminatedQuote { offset }
            | LexError::MalformedQuoted { offset }
            | LexError::SecondDecimalPoint { offset }
            | LexError::TooManyTokens { offset, .. } => offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::TooManyTokens { .. } => ErrorKind::TooManyArguments,
            _ => ErrorKind::InvalidSyntax,
        }
    }
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Cursor over one physical line.
///
/// The lexer holds no state besides its position, so scanning the same line twice yields the same
/// tokens.
pub struct Lexer<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte position within the line.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unscanned remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    fn at_line_end(&self) -> bool {
        self.peek().is_none_or(delimiters::is_line_end)
    }

    /// Skip spaces and tabs. Returns `false` when nothing but a line ending is left.
    pub fn skip_blanks(&mut self) -> bool {
        while self.peek().is_some_and(delimiters::is_blank) {
            self.pos += 1;
        }
        !self.at_line_end()
    }

    // ========================================================================
    // Token scanning
    // ========================================================================

    /// Scan one token starting exactly at the cursor.
    pub fn next_token(&mut self) -> Result<Lexeme<'a>, LexError> {
        match self.peek() {
            None => Ok(Lexeme::Boundary),
            Some(b) if delimiters::is_boundary(b) => Ok(Lexeme::Boundary),
            Some(COMMENT) => {
                self.pos = self.line.len();
                Ok(Lexeme::Comment)
            }
            Some(QUOTE) => self.scan_quoted(),
            Some(_) => self.scan_bare(),
        }
    }

    fn scan_quoted(&mut self) -> Result<Lexeme<'a>, LexError> {
        let open = self.pos;
        let start = open + 1;

        let mut close = start;
        loop {
            match self.line.as_bytes().get(close) {
                Some(&QUOTE) => break,
                Some(&b) if !delimiters::is_line_end(b) => close += 1,
                _ => return Err(LexError::UnterminatedQuote { offset: open }),
            }
        }

        let token = Token::new(
            TokenKind::QuotedString,
            &self.line[start..close],
            Span::new(start, close),
        );
        self.pos = close + 1;

        match self.peek() {
            Some(b) if delimiters::is_blank(b) || b == TERMINATOR => self.end_token(token),
            None => Err(LexError::Unterminated { offset: self.pos }),
            Some(b) if delimiters::is_line_end(b) => Err(LexError::Unterminated { offset: self.pos }),
            Some(_) => Err(LexError::MalformedQuoted { offset: self.pos }),
        }
    }

    fn scan_bare(&mut self) -> Result<Lexeme<'a>, LexError> {
        let start = self.pos;
        let mut kind = TokenKind::Number;

        loop {
            let Some(b) = self.peek() else {
                return Err(LexError::Unterminated { offset: self.pos });
            };
            if delimiters::is_blank(b) || b == TERMINATOR {
                let token = Token::new(kind, &self.line[start..self.pos], Span::new(start, self.pos));
                return self.end_token(token);
            }
            if delimiters::is_line_end(b) {
                return Err(LexError::Unterminated { offset: self.pos });
            }

            match (kind, b) {
                (TokenKind::Number, DECIMAL_POINT) => kind = TokenKind::Float,
                (TokenKind::Float, DECIMAL_POINT) => {
                    return Err(LexError::SecondDecimalPoint { offset: self.pos });
                }
                (TokenKind::Number | TokenKind::Float, b) if !b.is_ascii_digit() => kind = TokenKind::String,
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Consume the separator or terminator that follows a token.
    fn end_token(&mut self, token: Token<'a>) -> Result<Lexeme<'a>, LexError> {
        let terminated = self.peek() == Some(TERMINATOR);
        self.pos += 1;
        Ok(if terminated {
            Lexeme::Last(token)
        } else {
            Lexeme::More(token)
        })
    }

    // ========================================================================
    // Statement scanning
    // ========================================================================

    /// Scan the next statement of the line into `tokens` (cleared first).
    ///
    /// On error `tokens` holds whatever was scanned before the failure.
    pub fn scan_statement(&mut self, tokens: &mut Vec<Token<'a>>, max_tokens: usize) -> Result<StatementEnd, LexError> {
        tokens.clear();
        if !self.skip_blanks() {
            return Ok(StatementEnd::Blank);
        }

        loop {
            if tokens.len() >= max_tokens {
                return Err(LexError::TooManyTokens {
                    max: max_tokens,
                    offset: self.pos,
                });
            }
            match self.next_token()? {
                Lexeme::More(token) => tokens.push(token),
                Lexeme::Last(token) => {
                    tokens.push(token);
                    return Ok(StatementEnd::Terminator);
                }
                Lexeme::Comment => return Ok(StatementEnd::Comment),
                Lexeme::Boundary if !tokens.is_empty() && self.at_line_end() => {
                    return Err(LexError::Unterminated { offset: self.pos });
                }
                Lexeme::Boundary => return Err(LexError::UnexpectedSeparator { offset: self.pos }),
            }
        }
    }
}

/// Tokenize every statement of one line with the default token bound.
#[tracing::instrument(skip_all, fields(line_len = line.len()))]
pub fn lex_line(line: &str) -> Result<Vec<Statement<'_>>, LexError> {
    lex_line_with(line, MAX_TOKENS)
}

/// Tokenize every statement of one line, allowing at most `max_tokens` tokens per statement.
///
/// Blank and comment-only statements are dropped.
pub fn lex_line_with(line: &str, max_tokens: usize) -> Result<Vec<Statement<'_>>, LexError> {
    let mut lexer = Lexer::new(line);
    let mut statements = Vec::new();
    let mut tokens = Vec::new();

    loop {
        let end = lexer.scan_statement(&mut tokens, max_tokens)?;
        if !tokens.is_empty() {
            statements.push(Statement {
                tokens: std::mem::take(&mut tokens),
                end,
            });
        }
        if end != StatementEnd::Terminator {
            return Ok(statements);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
