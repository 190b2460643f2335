//! Demo grammar for `parseconf check`.
//!
//! ```text
//! name "edge-proxy";
//! workers 4; ratio 0.75;
//! tags fast secure;
//! log file "/var/log/proxy.log";
//! log level 3;
//! listen any 8080;
//! example 42;
//! ```

use std::fmt;

use parseconf_syntax::grammar::{CallbackError, ExpectedKind, SyntaxRule};
use parseconf_syntax::{Token, TokenKind};

/// Highest accepted `log level`.
pub const MAX_LOG_LEVEL: u8 = 7;

/// Settings collected by the demo grammar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub name: Option<String>,
    pub workers: Option<u32>,
    pub ratio: Option<f64>,
    pub tags: Vec<String>,
    pub log_file: Option<String>,
    pub log_level: Option<u8>,
    pub listen: Vec<(String, u16)>,
    /// One description per `example` statement, naming the kind of its value.
    pub examples: Vec<String>,
}

fn arg<'t, 'a>(tokens: &'t [Token<'a>], index: usize) -> Result<&'t Token<'a>, CallbackError> {
    tokens
        .get(index)
        .ok_or_else(|| format!("missing value for '{}'", tokens.first().map_or("", |t| t.text)).into())
}

fn set_name(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    config.name = Some(arg(tokens, 1)?.text.to_string());
    Ok(())
}

fn set_workers(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    let workers: u32 = arg(tokens, 1)?.value()?;
    if workers == 0 {
        return Err("workers must be at least 1".into());
    }
    config.workers = Some(workers);
    Ok(())
}

fn set_ratio(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    config.ratio = Some(arg(tokens, 1)?.value()?);
    Ok(())
}

fn add_tags(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    config.tags.extend(tokens.iter().skip(1).map(|t| t.text.to_string()));
    Ok(())
}

fn set_log_file(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    config.log_file = Some(arg(tokens, 2)?.text.to_string());
    Ok(())
}

fn set_log_level(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    let level: u8 = arg(tokens, 2)?.value()?;
    if level > MAX_LOG_LEVEL {
        return Err(format!("log level must be between 0 and {MAX_LOG_LEVEL}").into());
    }
    config.log_level = Some(level);
    Ok(())
}

fn add_listener(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    let address = arg(tokens, 1)?.text.to_string();
    let port: u16 = arg(tokens, 2)?.value()?;
    config.listen.push((address, port));
    Ok(())
}

fn describe_example(config: &mut DemoConfig, tokens: &[Token<'_>]) -> Result<(), CallbackError> {
    let token = arg(tokens, 1)?;
    let description = match token.kind {
        TokenKind::Number => format!("number {}", token.value::<u64>()?),
        TokenKind::Float => format!("float {}", token.value::<f64>()?),
        TokenKind::String => format!("string {}", token.text),
        TokenKind::QuotedString => format!("quoted string {}", token.text),
    };
    config.examples.push(description);
    Ok(())
}

/// Sub-keywords of `log`.
pub const LOG_RULES: &[SyntaxRule<'static, DemoConfig>] = &[
    SyntaxRule::new("file", &[ExpectedKind::QSTRING]).with_callback(set_log_file),
    SyntaxRule::new("level", &[ExpectedKind::NUMBER]).with_callback(set_log_level),
];

/// Top-level demo grammar.
pub const DEMO_RULES: &[SyntaxRule<'static, DemoConfig>] = &[
    SyntaxRule::new("name", &[ExpectedKind::QSTRING]).with_callback(set_name),
    SyntaxRule::new("workers", &[ExpectedKind::NUMBER]).with_callback(set_workers),
    SyntaxRule::new("ratio", &[ExpectedKind::FLOAT]).with_callback(set_ratio),
    SyntaxRule::new("tags", &[ExpectedKind::STRINGS]).with_callback(add_tags),
    SyntaxRule::new("log", &[ExpectedKind::NESTED]).with_nested(LOG_RULES),
    SyntaxRule::new("listen", &[ExpectedKind::ANY, ExpectedKind::NUMBER]).with_callback(add_listener),
    SyntaxRule::new("example", &[ExpectedKind::ANY]).with_callback(describe_example),
];

impl fmt::Display for DemoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "name = {name:?}")?;
        }
        if let Some(workers) = self.workers {
            writeln!(f, "workers = {workers}")?;
        }
        if let Some(ratio) = self.ratio {
            writeln!(f, "ratio = {ratio}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "tags = [{}]", self.tags.join(", "))?;
        }
        if let Some(file) = &self.log_file {
            writeln!(f, "log.file = {file:?}")?;
        }
        if let Some(level) = self.log_level {
            writeln!(f, "log.level = {level}")?;
        }
        for (address, port) in &self.listen {
            writeln!(f, "listen = {address}:{port}")?;
        }
        for example in &self.examples {
            writeln!(f, "example = {example}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::driver::ConfParser;
    use parseconf_core::ErrorKind;

    const PARSER: ConfParser<'static, DemoConfig> = ConfParser::new(DEMO_RULES);

    #[test]
    fn test_full_demo_config() {
        let mut config = DemoConfig::default();
        let text = "name \"edge\";\nworkers 4; ratio 0.75;\ntags fast secure;\nlog file \"out.log\";\nlog level 3;\nlisten any 8080;\nexample 42; example \"hi there\";\nexample 2.5; example word;\n";
        PARSER.parse_text(&mut config, text).unwrap();

        insta::assert_snapshot!(config.to_string().trim_end(), @r#"
        name = "edge"
        workers = 4
        ratio = 0.75
        tags = [fast, secure]
        log.file = "out.log"
        log.level = 3
        listen = any:8080
        example = number 42
        example = quoted string hi there
        example = float 2.5
        example = string word
        "#);
    }

    #[test]
    fn test_callbacks_validate_values() {
        let mut config = DemoConfig::default();
        let err = PARSER.parse_text(&mut config, "log level 9;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Callback);
        assert_eq!(err.message.as_deref(), Some("log level must be between 0 and 7"));

        let err = PARSER.parse_text(&mut config, "workers 0;").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("workers must be at least 1"));

        let err = PARSER.parse_text(&mut config, "listen any 65536;").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("invalid value"));
    }

    #[test]
    fn test_missing_values_are_rejected_by_callbacks() {
        let mut config = DemoConfig::default();
        let err = PARSER.parse_text(&mut config, "workers;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Callback);
        assert_eq!(err.message.as_deref(), Some("missing value for 'workers'"));
    }
}
