#![no_main]

use libfuzzer_sys::fuzz_target;
use micro_syntax::{SyntaxConfig, lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Byte input goes through the reader path, so invalid UTF-8 must surface as a `SourceError`, never a panic.
    let config = SyntaxConfig::default();
    let _ = parser::recognize_reader(data, &config);

    if let Ok(s) = std::str::from_utf8(data) {
        let lexed = lexer::lex(s).expect("in-memory source cannot fail");
        assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(lexer::TokenKind::Eof));
        let _ = parser::recognize(s);
    }
});
