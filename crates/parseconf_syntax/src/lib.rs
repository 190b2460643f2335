//! Syntax layer for parseconf: tokenizer, grammar matcher, value converters, diagnostics.
//!
//! The crate works on one physical line at a time and performs no I/O; reading files and iterating
//! lines is the line driver's job (the `parseconf` crate).
//!
//! ## Notes
//! - Tokens borrow from the line they were scanned from. Nothing here copies token text.
//! - Grammar tables are plain `const` slices of [`grammar::SyntaxRule`]; the matcher never mutates them.
//!
//! ## Examples
//! ```rust
//! use parseconf_syntax::grammar::{self, CallbackError, ExpectedKind, KeywordMatch, SyntaxRule};
//! use parseconf_syntax::lexer::{self, Token};
//!
//! fn set_answer(answer: &mut u64, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
//!     *answer = tokens[1].value()?;
//!     Ok(())
//! }
//!
//! const RULES: &[SyntaxRule<'static, u64>] =
//!     &[SyntaxRule::new("answer", &[ExpectedKind::NUMBER]).with_callback(set_answer)];
//!
//! let statements = lexer::lex_line("answer 42;\n").unwrap();
//! let mut answer = 0;
//! grammar::match_line(RULES, &statements[0].tokens, &mut answer, KeywordMatch::Exact).unwrap();
//! assert_eq!(answer, 42);
//! ```

pub mod convert;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;

pub use convert::{ConvertError, FromToken};
pub use diagnostics::ParseError;
pub use grammar::{CallbackError, ExpectedKind, KeywordMatch, SyntaxRule};
pub use lexer::{Lexer, Span, Token, TokenKind};
