//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use parseconf_core::{ErrorKind, status};
use parseconf_syntax::ParseError;
use parseconf_syntax::lexer::{Lexer, StatementEnd};

use super::demo::{DEMO_RULES, DemoConfig};
use super::{CliError, CliResult, ExitCode, Input};
use crate::driver::{ConfParser, ParserOptions};

/// Maximum configuration file size (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

// ============================================================================
// Input handling
// ============================================================================

/// Read source file with size limit.
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Configuration file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

fn load(input: &Input) -> CliResult<String> {
    match input {
        Input::File(path) => read_source(path),
        Input::Text(text) => Ok(text.clone()),
    }
}

/// Render a parse failure against the input it came from.
pub fn render(err: ParseError, name: &str, source: String) -> String {
    format!("{:?}", Report::new(err).with_source_code(NamedSource::new(name, source)))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize every statement and list the tokens, one statement per line.
pub fn lex(input: &Input, options: ParserOptions) -> CliResult<ExitCode> {
    let source = load(input)?;
    match lex_source(&source, options.max_tokens) {
        Ok(listing) => {
            print!("{listing}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::parse(render(err, &input.name(), source))),
    }
}

/// Token listing for `source`: `<line>: <token> <token> ...` per statement.
pub fn lex_source(source: &str, max_tokens: usize) -> Result<String, ParseError> {
    let mut listing = String::new();
    let mut offset = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let mut lexer = Lexer::new(line);
        let mut tokens = Vec::new();
        loop {
            let end = match lexer.scan_statement(&mut tokens, max_tokens) {
                Ok(end) => end,
                Err(err) => return Err(ParseError::from_lex(&err, index + 1, tokens.len(), line, offset)),
            };
            if !tokens.is_empty() {
                let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                listing.push_str(&format!("{}: {}\n", index + 1, rendered.join(" ")));
            }
            if end != StatementEnd::Terminator {
                break;
            }
        }
        offset += line.len();
    }
    Ok(listing)
}

/// Parse against the demo grammar and print the collected settings.
pub fn check(input: &Input, options: ParserOptions) -> CliResult<ExitCode> {
    let parser = ConfParser::new(DEMO_RULES).with_options(options);
    let mut config = DemoConfig::default();

    let result = match input {
        Input::File(path) => parser.parse_file(&mut config, path),
        Input::Text(text) => parser.parse_text(&mut config, text),
    };

    match result {
        Ok(()) => {
            print!("{config}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.kind == ErrorKind::File => Err(CliError::parse(format!("Error: {}: {}", input.name(), err))),
        Err(err) => {
            let source = load(input)?;
            Err(CliError::parse(render(err, &input.name(), source)))
        }
    }
}

/// Print the description of an integer result code.
pub fn strerror(code: i32) -> CliResult<ExitCode> {
    println!("{code}: {}", status::strerror(code));
    Ok(ExitCode::SUCCESS)
}
