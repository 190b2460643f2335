//! Line driver: feeds files, readers and text buffers through the tokenizer and the grammar matcher.
//!
//! Input is processed one physical line at a time. Every statement on a line is tokenized and
//! dispatched before the next line is read; the first failure stops processing, is handed once to the
//! reporter together with the statement's tokens, and is returned to the caller.
//!
//! ## Notes
//! - Line numbers are 1-based and count every line consumed, including the one that failed.
//!   Open failures are reported at line 0.
//! - A final line without a trailing newline is accepted.
//! - Spans in reported errors are byte ranges of the whole input, so they can be rendered against it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use parseconf_syntax::grammar::{self, KeywordMatch, SyntaxRule};
use parseconf_syntax::lexer::{Lexer, MAX_TOKENS, StatementEnd};
use parseconf_syntax::{ParseError, Token};

// ============================================================================
// OPTIONS
// ============================================================================

/// Knobs for one parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of tokens in one statement.
    pub max_tokens: usize,
    /// How statement tokens are compared against rule keywords.
    pub keyword_match: KeywordMatch,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_tokens: MAX_TOKENS,
            keyword_match: KeywordMatch::Exact,
        }
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// A grammar table bound to parser options.
///
/// The parser holds no per-input state; one instance can parse any number of inputs, from any number of
/// threads when the user contexts are distinct.
pub struct ConfParser<'g, U> {
    rules: &'g [SyntaxRule<'g, U>],
    options: ParserOptions,
}

impl<U> Clone for ConfParser<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for ConfParser<'_, U> {}

impl<U> fmt::Debug for ConfParser<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfParser")
            .field("rules", &self.rules.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<'g, U> ConfParser<'g, U> {
    pub const fn new(rules: &'g [SyntaxRule<'g, U>]) -> Self {
        Self {
            rules,
            options: ParserOptions {
                max_tokens: MAX_TOKENS,
                keyword_match: KeywordMatch::Exact,
            },
        }
    }

    pub const fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn rules(&self) -> &'g [SyntaxRule<'g, U>] {
        self.rules
    }

    /// Parse the file at `path`.
    pub fn parse_file(&self, user: &mut U, path: impl AsRef<Path>) -> Result<(), ParseError> {
        self.parse_file_with(user, path, |_, _, _| {})
    }

    /// Parse the file at `path`, reporting the first failure to `reporter`.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse_file_with<F>(&self, user: &mut U, path: impl AsRef<Path>, mut reporter: F) -> Result<(), ParseError>
    where
        F: FnMut(&mut U, &ParseError, &[Token<'_>]),
    {
        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                let error = ParseError::io(err, 0);
                reporter(user, &error, &[]);
                return Err(error);
            }
        };
        self.parse_reader(user, BufReader::new(file), reporter)
    }

    /// Parse everything `reader` yields, line by line.
    pub fn parse_reader<R, F>(&self, user: &mut U, mut reader: R, mut reporter: F) -> Result<(), ParseError>
    where
        R: BufRead,
        F: FnMut(&mut U, &ParseError, &[Token<'_>]),
    {
        let mut buf = String::new();
        let mut line_no = 0;
        let mut offset = 0;

        loop {
            buf.clear();
            let read = reader.read_line(&mut buf);
            line_no += 1;
            let read = match read {
                Ok(0) => return Ok(()),
                Ok(read) => read,
                Err(err) => {
                    let error = ParseError::io(err, line_no);
                    reporter(user, &error, &[]);
                    return Err(error);
                }
            };

            self.parse_line(user, &buf, line_no, offset, &mut reporter)?;
            offset += read;
        }
    }

    /// Parse an in-memory buffer.
    pub fn parse_text(&self, user: &mut U, text: &str) -> Result<(), ParseError> {
        self.parse_text_with(user, text, |_, _, _| {})
    }

    /// Parse an in-memory buffer, reporting the first failure to `reporter`.
    ///
    /// Lines are processed exactly like file lines; an empty buffer parses successfully.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse_text_with<F>(&self, user: &mut U, text: &str, mut reporter: F) -> Result<(), ParseError>
    where
        F: FnMut(&mut U, &ParseError, &[Token<'_>]),
    {
        let mut offset = 0;
        for (index, line) in text.split_inclusive('\n').enumerate() {
            self.parse_line(user, line, index + 1, offset, &mut reporter)?;
            offset += line.len();
        }
        Ok(())
    }

    /// Tokenize and dispatch every statement of one line.
    fn parse_line<F>(
        &self,
        user: &mut U,
        line: &str,
        line_no: usize,
        offset: usize,
        reporter: &mut F,
    ) -> Result<(), ParseError>
    where
        F: FnMut(&mut U, &ParseError, &[Token<'_>]),
    {
        let mut lexer = Lexer::new(line);
        let mut tokens = Vec::new();

        loop {
            let end = match lexer.scan_statement(&mut tokens, self.options.max_tokens) {
                Ok(end) => end,
                Err(err) => {
                    let error = ParseError::from_lex(&err, line_no, tokens.len(), line, offset);
                    tracing::debug!(line = line_no, %error, "statement rejected by tokenizer");
                    reporter(user, &error, &tokens);
                    return Err(error);
                }
            };

            if let Some(keyword) = tokens.first() {
                if let Err(err) = grammar::match_line(self.rules, &tokens, user, self.options.keyword_match) {
                    let error = ParseError::from_match(err, line_no, &tokens, offset);
                    tracing::debug!(line = line_no, %error, "statement rejected by grammar");
                    reporter(user, &error, &tokens);
                    return Err(error);
                }
                tracing::trace!(line = line_no, keyword = keyword.text, "statement accepted");
            }

            if end != StatementEnd::Terminator {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parseconf_core::ErrorKind;
    use parseconf_syntax::grammar::{CallbackError, ExpectedKind};
    use std::io::{self, Cursor, Read};

    #[derive(Debug, Default)]
    struct Seen {
        statements: Vec<String>,
        reported: Vec<(ErrorKind, usize, usize)>,
    }

    fn record(seen: &mut Seen, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        seen.statements.push(texts.join(" "));
        Ok(())
    }

    fn report(seen: &mut Seen, err: &ParseError, tokens: &[Token<'_>]) {
        seen.reported.push((err.kind, err.line, tokens.len()));
    }

    const RULES: &[SyntaxRule<'static, Seen>] = &[
        SyntaxRule::new("answer", &[ExpectedKind::NUMBER]).with_callback(record),
        SyntaxRule::new("name", &[ExpectedKind::QSTRING]).with_callback(record),
    ];

    const PARSER: ConfParser<'static, Seen> = ConfParser::new(RULES);

    #[test]
    fn test_text_lines_and_statements() {
        let mut seen = Seen::default();
        let text = "# header\n\nanswer 42; name \"x\";\r\n   \nanswer 7;";
        PARSER.parse_text(&mut seen, text).unwrap();
        assert_eq!(seen.statements, vec!["answer 42", "name x", "answer 7"]);
    }

    #[test]
    fn test_empty_text_is_ok() {
        let mut seen = Seen::default();
        PARSER.parse_text(&mut seen, "").unwrap();
        assert!(seen.statements.is_empty());
    }

    #[test]
    fn test_first_error_stops_and_is_reported_once() {
        let mut seen = Seen::default();
        let text = "answer 1;\nanswer x;\nanswer 3;\n";
        let err = PARSER.parse_text_with(&mut seen, text, report).unwrap_err();

        assert_eq!(err.kind, ErrorKind::ExpectNumber);
        assert_eq!(err.line, 2);
        assert_eq!(err.token, 1);
        // "answer 1;\n" is 10 bytes; `x` sits 7 bytes into line 2.
        assert_eq!(err.span, Some(parseconf_syntax::Span::new(17, 18)));
        assert_eq!(seen.statements, vec!["answer 1"]);
        assert_eq!(seen.reported, vec![(ErrorKind::ExpectNumber, 2, 2)]);
    }

    #[test]
    fn test_lex_error_reports_partial_tokens() {
        let mut seen = Seen::default();
        let err = PARSER.parse_text_with(&mut seen, "answer 42\n", report).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSyntax);
        // `42` was never completed, only `answer` reaches the reporter.
        assert_eq!(seen.reported, vec![(ErrorKind::InvalidSyntax, 1, 1)]);
    }

    #[test]
    fn test_token_bound_stops_before_dispatch() {
        let parser = PARSER.with_options(ParserOptions {
            max_tokens: 2,
            ..ParserOptions::default()
        });
        let mut seen = Seen::default();
        let err = parser.parse_text(&mut seen, "answer 1 2;\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooManyArguments);
        assert!(seen.statements.is_empty());
    }

    #[test]
    fn test_prefix_keywords_option() {
        let mut seen = Seen::default();
        assert_eq!(
            PARSER.parse_text(&mut seen, "ans 1;").unwrap_err().kind,
            ErrorKind::UnknownKeyword
        );

        let parser = PARSER.with_options(ParserOptions {
            keyword_match: KeywordMatch::TokenPrefix,
            ..ParserOptions::default()
        });
        parser.parse_text(&mut seen, "ans 1;").unwrap();
        assert_eq!(seen.statements, vec!["ans 1"]);
    }

    #[test]
    fn test_reader_matches_text() {
        let text = "answer 1;\nname \"two\"; answer 3;\n";
        let mut from_text = Seen::default();
        let mut from_reader = Seen::default();
        PARSER.parse_text(&mut from_text, text).unwrap();
        PARSER
            .parse_reader(&mut from_reader, Cursor::new(text), |_, _, _| {})
            .unwrap();
        assert_eq!(from_text.statements, from_reader.statements);
    }

    #[test]
    fn test_reader_spans_are_absolute() {
        let mut seen = Seen::default();
        let err = PARSER
            .parse_reader(&mut seen, Cursor::new("answer 1;\nbogus 2;\n"), report)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword);
        assert_eq!(err.span, Some(parseconf_syntax::Span::new(10, 15)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_read_failure_is_a_file_error() {
        let mut seen = Seen::default();
        let err = PARSER
            .parse_reader(&mut seen, io::BufReader::new(FailingReader), report)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::File);
        assert_eq!(err.line, 1);
        assert!(err.io_error().is_some());
        assert_eq!(seen.reported, vec![(ErrorKind::File, 1, 0)]);
    }

    #[test]
    fn test_missing_file_is_reported_at_line_zero() {
        let mut seen = Seen::default();
        let err = PARSER
            .parse_file_with(&mut seen, "/nonexistent/parseconf/missing.conf", report)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::File);
        assert_eq!(err.line, 0);
        assert_eq!(seen.reported, vec![(ErrorKind::File, 0, 0)]);
    }
}
