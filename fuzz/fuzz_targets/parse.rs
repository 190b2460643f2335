#![no_main]

use libfuzzer_sys::fuzz_target;
use parseconf::cli::demo::{DEMO_RULES, DemoConfig};
use parseconf::{ConfParser, lexer};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the tokenizer line by line
        for line in s.split_inclusive('\n') {
            let _ = lexer::lex_line(line);
        }
        // Then the whole pipeline against the demo grammar
        let mut config = DemoConfig::default();
        let _ = ConfParser::new(DEMO_RULES).parse_text(&mut config, s);
    }
});
