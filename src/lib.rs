#![forbid(unsafe_code)]
//! parseconf: a table-driven parser for small line-oriented configuration languages.
//!
//! Raw text is split into statements of typed tokens; every statement is matched against a grammar
//! table supplied by the program and dispatched to the rule's callback. The workspace is split in three:
//!
//! - `parseconf_core` - vocabulary: byte classes, error kinds, result codes, version
//! - `parseconf_syntax` - tokenizer, grammar matcher, value converters, diagnostics
//! - this crate - the line driver over files, readers and text buffers, plus the `parseconf` CLI
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups in `parseconf_core` panic only when a registry entry is missing,
//!   which the guardrail tests rule out.
//!
//! ## Examples
//! ```rust
//! use parseconf::{CallbackError, ConfParser, ExpectedKind, SyntaxRule, Token};
//!
//! #[derive(Default)]
//! struct Settings {
//!     workers: u32,
//!     log_file: String,
//! }
//!
//! fn workers(settings: &mut Settings, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
//!     settings.workers = tokens[1].value()?;
//!     Ok(())
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
//! const RULES: &[SyntaxRule<'static, Settings>] = &[
//!     SyntaxRule::new("workers", &[ExpectedKind::NUMBER]).with_callback(workers),
//!     SyntaxRule::new("log", &[ExpectedKind::NESTED]).with_nested(LOG),
//! ];
//!
//! let mut settings = Settings::default();
//! ConfParser::new(RULES)
//!     .parse_text(&mut settings, "workers 4; # per core\nlog file \"out.txt\";\n")
//!     .unwrap();
//! assert_eq!(settings.workers, 4);
//! assert_eq!(settings.log_file, "out.txt");
//! ```

pub mod cli;
pub mod driver;

pub use driver::{ConfParser, ParserOptions};

pub use parseconf_core::status::{self, Status, strerror};
pub use parseconf_core::{ErrorKind, version};
pub use parseconf_syntax::convert::{self, ConvertError, FromToken};
pub use parseconf_syntax::grammar::{self, CallbackError, ExpectedKind, KeywordMatch, SyntaxRule};
pub use parseconf_syntax::lexer::{self, Span, Token, TokenKind};
pub use parseconf_syntax::{ParseError, diagnostics};
