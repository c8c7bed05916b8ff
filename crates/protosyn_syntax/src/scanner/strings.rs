//! String literal scanning.
//!
//! A literal is delimited by matching single or double quotes and must sit on
//! one line. Character values are hex escapes (`\xHH`, `\XHH`), octal escapes
//! (up to three octal digits), single-character escapes, or any rune other
//! than NUL, newline, or a bare backslash. The returned token text keeps the
//! surrounding quotes.

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::ScanError;
use crate::position::Position;

impl Scanner {
    /// Scan a string literal whose opening `quote` was already consumed.
    pub(super) fn scan_str_lit(&mut self, quote: char, start: Position) -> Result<Token, ScanError> {
        let mut text = String::from(quote);
        loop {
            let pos = self.reader.pos();
            let Some(c) = self.reader.read() else {
                return Err(ScanError::eof("closing quote", pos));
            };
            if c == quote {
                text.push(c);
                return Ok(Token::new(TokenKind::StrLit, text, start));
            }
            match c {
                '\n' => {
                    self.reader.unread(c);
                    return Err(ScanError::new("\\n", "closing quote on the same line", pos));
                }
                '\0' => {
                    return Err(ScanError::new("\\0", "string literal character", pos));
                }
                '\\' => {
                    text.push(c);
                    self.scan_char_escape(&mut text)?;
                }
                _ => text.push(c),
            }
        }
    }

    /// Scan the character(s) after a backslash.
    fn scan_char_escape(&mut self, text: &mut String) -> Result<(), ScanError> {
        let pos = self.reader.pos();
        let Some(c) = self.reader.read() else {
            return Err(ScanError::eof("escape character", pos));
        };
        match c {
            'x' | 'X' => {
                text.push(c);
                let mut digits = 0;
                while digits < 2 {
                    match self.reader.read() {
                        Some(h) if h.is_ascii_hexdigit() => {
                            text.push(h);
                            digits += 1;
                        }
                        Some(h) => {
                            self.reader.unread(h);
                            break;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err(self.unexpected_here("hex digit"));
                }
                Ok(())
            }
            '0'..='7' => {
                text.push(c);
                // Up to two further octal digits.
                for _ in 0..2 {
                    match self.reader.read() {
                        Some(o) if ('0'..='7').contains(&o) => text.push(o),
                        Some(o) => {
                            self.reader.unread(o);
                            break;
                        }
                        None => break,
                    }
                }
                Ok(())
            }
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '\'' | '"' => {
                text.push(c);
                Ok(())
            }
            other => Err(ScanError::new(
                other.to_string(),
                "escape character [abfnrtv\\'\"] or hex/octal escape",
                pos,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Mode, Scanner, TokenKind};

    fn scan_str(source: &str) -> Result<String, crate::diagnostics::ScanError> {
        let mut s = Scanner::new(source, "");
        s.mode = Mode::STR_LIT;
        s.scan().map(|t| {
            assert_eq!(t.kind, TokenKind::StrLit);
            t.text
        })
    }

    #[test]
    fn test_double_and_single_quotes() {
        assert_eq!(scan_str("\"foo\"").unwrap(), "\"foo\"");
        assert_eq!(scan_str("'bar'").unwrap(), "'bar'");
    }

    #[test]
    fn test_text_keeps_quotes_and_escapes() {
        assert_eq!(scan_str(r#""a\nb""#).unwrap(), r#""a\nb""#);
        assert_eq!(scan_str(r#""a\x41b""#).unwrap(), r#""a\x41b""#);
        assert_eq!(scan_str(r#""\101""#).unwrap(), r#""\101""#);
        assert_eq!(scan_str(r#""say \"hi\"""#).unwrap(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_other_quote_kind_is_plain_content() {
        assert_eq!(scan_str(r#""it's""#).unwrap(), r#""it's""#);
    }

    #[test]
    fn test_unterminated_at_eof() {
        let err = scan_str("\"abc").unwrap_err();
        assert_eq!(err.found, "<eof>");
    }

    #[test]
    fn test_newline_inside_literal_fails() {
        let err = scan_str("\"ab\ncd\"").unwrap_err();
        assert_eq!(err.found, "\\n");
    }

    #[test]
    fn test_bad_escape_fails() {
        let err = scan_str(r#""\q""#).unwrap_err();
        assert_eq!(err.found, "q");
    }

    #[test]
    fn test_hex_escape_requires_digit() {
        let err = scan_str(r#""\xg""#).unwrap_err();
        assert_eq!(err.expected, "hex digit");
    }
}
