//! Token dump writer.
//!
//! Writes one uppercase label per token, separated by single spaces. Tokens from the same input line share an
//! output line; when a token starts on a later line, one newline is written first, so blank input lines collapse.
//! The dump always ends with `SCANEOF` and a newline.

use std::io::{self, Write};

use crate::lexer::{Token, TokenKind};

/// Streaming writer for the token dump.
pub struct TokenDump<W> {
    out: W,
    last_line: usize,
    at_line_start: bool,
}

impl<W: Write> TokenDump<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_line: 1,
            at_line_start: true,
        }
    }

    /// Write the label of `token`, starting a new output line if the token is on a later input line.
    pub fn write_token(&mut self, token: &Token) -> io::Result<()> {
        if token.line > self.last_line {
            self.out.write_all(b"\n")?;
            self.last_line = token.line;
            self.at_line_start = true;
        }
        if !self.at_line_start {
            self.out.write_all(b" ")?;
        }
        self.out.write_all(token.kind.label().as_bytes())?;
        self.at_line_start = false;

        if token.kind == TokenKind::Eof {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lexer;

    fn dump(source: &str) -> String {
        let lexed = lexer::lex(source).unwrap();
        let mut dump = TokenDump::new(Vec::new());
        for token in &lexed.tokens {
            dump.write_token(token).unwrap();
        }
        String::from_utf8(dump.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_one_output_line_per_input_line() {
        let source = "main {\n  read(a, b);\n\n\n  write(a + b); // sum\n}\n";
        insta::assert_snapshot!(dump(source), @r"
        MAIN LBRACK
        READ LPAREN ID COMMA ID RPAREN SEMICOLON
        WRITE LPAREN ID PLUSOP ID RPAREN SEMICOLON
        RBRACK
        SCANEOF
        ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(dump(""), "SCANEOF\n");
    }

    #[test]
    fn test_eof_on_same_line() {
        assert_eq!(dump("main{}"), "MAIN LBRACK RBRACK SCANEOF\n");
    }
}
