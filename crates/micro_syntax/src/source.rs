//! Character sources and the peekable cursor the scanner reads through.
//!
//! The input is read strictly once, left to right. The [`Cursor`] keeps a single lookahead slot, so the scanner can
//! look at the character after `=`, `!`, `<`, `>`, `:` or `/` without consuming it, and it keeps the running line
//! counter used by every diagnostic.
//!
//! ## Notes
//! - [`StrSource`] never fails. [`ReaderSource`] fails with [`SourceError`] on an IO error or invalid UTF-8; that is
//!   the only fatal error a scanning/recognition run can hit.

use std::io::{self, BufRead};

use thiserror::Error;

/// Fatal failure of the character source.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum SourceError {
    #[error("failed to read source text: {0}")]
    #[diagnostic(code(micro::source::read), help("the input must be readable UTF-8 text"))]
    Read(#[from] io::Error),
}

/// A sequential stream of characters.
pub trait CharSource {
    /// Return the next character, or `None` once the stream is exhausted.
    fn read_char(&mut self) -> Result<Option<char>, SourceError>;
}

/// Character source over an in-memory string.
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { chars: source.chars() }
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> Result<Option<char>, SourceError> {
        Ok(self.chars.next())
    }
}

/// Character source over a buffered reader, decoded as UTF-8 one line at a time.
pub struct ReaderSource<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> Result<Option<char>, SourceError> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }

        let Some(c) = self.line[self.pos..].chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();
        Ok(Some(c))
    }
}

/// Peekable cursor over a [`CharSource`] with line and byte-offset tracking.
pub struct Cursor<S> {
    source: S,
    /// `Some(c)` once the next character has been read ahead; `c` itself is `None` at end of input
    peeked: Option<Option<char>>,
    offset: usize,
    line: usize,
}

impl<S: CharSource> Cursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            peeked: None,
            offset: 0,
            line: 1,
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Result<Option<char>, SourceError> {
        if let Some(c) = self.peeked {
            return Ok(c);
        }
        let c = self.source.read_char()?;
        self.peeked = Some(c);
        Ok(c)
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Result<Option<char>, SourceError> {
        let c = match self.peeked.take() {
            Some(c) => c,
            None => self.source.read_char()?,
        };
        if let Some(c) = c {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
            }
        }
        Ok(c)
    }

    /// Consume the next character only if it is `expected`.
    pub fn eat(&mut self, expected: char) -> Result<bool, SourceError> {
        if self.peek()? == Some(expected) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 1-based line of the next unconsumed character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new(StrSource::new("ab"));
        assert_eq!(cursor.peek().unwrap(), Some('a'));
        assert_eq!(cursor.peek().unwrap(), Some('a'));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.bump().unwrap(), Some('a'));
        assert_eq!(cursor.bump().unwrap(), Some('b'));
        assert_eq!(cursor.bump().unwrap(), None);
        assert_eq!(cursor.bump().unwrap(), None);
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_line_counts_consumed_newlines_only() {
        let mut cursor = Cursor::new(StrSource::new("a\n\nb"));
        cursor.bump().unwrap();
        assert_eq!(cursor.peek().unwrap(), Some('\n'));
        assert_eq!(cursor.line(), 1, "peeking a newline must not count it");
        cursor.bump().unwrap();
        cursor.bump().unwrap();
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new(StrSource::new("=x"));
        assert!(cursor.eat('=').unwrap());
        assert!(!cursor.eat('=').unwrap());
        assert_eq!(cursor.bump().unwrap(), Some('x'));
    }

    #[test]
    fn test_reader_source_matches_str_source() {
        let text = "main {\n  x := 1; // é\n}\n";
        let mut from_reader = Cursor::new(ReaderSource::new(text.as_bytes()));
        let mut from_str = Cursor::new(StrSource::new(text));
        loop {
            let a = from_reader.bump().unwrap();
            let b = from_str.bump().unwrap();
            assert_eq!(a, b);
            assert_eq!(from_reader.offset(), from_str.offset());
            assert_eq!(from_reader.line(), from_str.line());
            if a.is_none() {
                break;
            }
        }
    }

    #[test]
    fn test_reader_source_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'm', 0xff, 0xfe, b'\n'];
        let mut source = ReaderSource::new(bytes);
        let err = source.read_char().unwrap_err();
        assert!(matches!(err, SourceError::Read(ref e) if e.kind() == io::ErrorKind::InvalidData));
    }
}
