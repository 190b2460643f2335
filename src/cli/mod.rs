//! CLI module for parseconf
//!
//! A small front end that exercises the library end to end.
//!
//! ## Commands
//!
//! - `lex <FILE>` / `lex --text <TEXT>` - Print the tokens of every statement
//! - `check <FILE>` / `check --text <TEXT>` - Parse against the demo grammar and print the settings
//! - `strerror <CODE>` - Describe an integer result code
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `demo` - The demo grammar used by `check`
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod demo;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use parseconf_syntax::KeywordMatch;
use parseconf_syntax::lexer::MAX_TOKENS;

use crate::driver::ParserOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The input could not be read or did not parse.
    pub const PARSE_ERROR: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a parse error (exit code 2).
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::PARSE_ERROR)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = parseconf_core::version::VERSION;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Table-driven configuration parser
#[derive(Parser, Debug)]
#[command(name = "parseconf")]
#[command(version = VERSION)]
#[command(about = "Tokenize and check parseconf configuration files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of every statement
    Lex {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        parser: ParserArgs,
    },

    /// Parse input against the demo grammar and print the resulting settings
    Check {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        parser: ParserArgs,
    },

    /// Describe an integer result code
    Strerror {
        /// Result code (negative values are errors)
        #[arg(value_name = "CODE", allow_negative_numbers = true)]
        code: i32,
    },
}

/// Where the configuration text comes from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Configuration file to read
    #[arg(value_name = "FILE", required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Inline configuration text instead of a file
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// Parser knobs shared by every command that reads configuration text.
#[derive(Args, Debug, Clone)]
pub struct ParserArgs {
    /// Maximum number of tokens in one statement
    #[arg(long, value_name = "N", default_value_t = MAX_TOKENS)]
    pub max_tokens: usize,

    /// Accept any prefix of a keyword (`se` selects `set`)
    #[arg(long)]
    pub prefix_keywords: bool,
}

impl ParserArgs {
    pub fn options(&self) -> ParserOptions {
        ParserOptions {
            max_tokens: self.max_tokens,
            keyword_match: if self.prefix_keywords {
                KeywordMatch::TokenPrefix
            } else {
                KeywordMatch::Exact
            },
        }
    }
}

/// Input resolved from [`InputArgs`].
#[derive(Debug, Clone)]
pub enum Input {
    File(PathBuf),
    Text(String),
}

impl Input {
    /// Name used when rendering diagnostics.
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Text(_) => "<text>".to_string(),
        }
    }
}

impl InputArgs {
    pub fn resolve(self) -> CliResult<Input> {
        match (self.file, self.text) {
            (_, Some(text)) => Ok(Input::Text(text)),
            (Some(file), None) => Ok(Input::File(file)),
            (None, None) => Err(CliError::failure("Error: a FILE or --text is required")),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Lex { input, parser } => commands::lex(&input.resolve()?, parser.options()),
        Command::Check { input, parser } => commands::check(&input.resolve()?, parser.options()),
        Command::Strerror { code } => commands::strerror(code),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex_file() {
        let cli = Cli::try_parse_from(["parseconf", "lex", "app.conf"]).unwrap();
        if let Command::Lex { input, parser } = cli.command {
            assert_eq!(input.file, Some(PathBuf::from("app.conf")));
            assert_eq!(parser.options(), ParserOptions::default());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_check_text_with_options() {
        let cli = Cli::try_parse_from([
            "parseconf",
            "check",
            "--text",
            "workers 4;",
            "--max-tokens",
            "8",
            "--prefix-keywords",
        ])
        .unwrap();
        if let Command::Check { input, parser } = cli.command {
            assert!(matches!(input.resolve().unwrap(), Input::Text(text) if text == "workers 4;"));
            assert_eq!(
                parser.options(),
                ParserOptions {
                    max_tokens: 8,
                    keyword_match: KeywordMatch::TokenPrefix,
                }
            );
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_requires_some_input() {
        assert!(Cli::try_parse_from(["parseconf", "check"]).is_err());
        assert!(Cli::try_parse_from(["parseconf", "lex", "a.conf", "--text", "x;"]).is_err());
    }

    #[test]
    fn test_cli_parse_negative_code() {
        let cli = Cli::try_parse_from(["parseconf", "strerror", "-2"]).unwrap();
        assert!(matches!(cli.command, Command::Strerror { code: -2 }));
    }

    #[test]
    fn test_input_names() {
        assert_eq!(Input::Text(String::new()).name(), "<text>");
        assert_eq!(Input::File(PathBuf::from("a/b.conf")).name(), "a/b.conf");
    }
}
