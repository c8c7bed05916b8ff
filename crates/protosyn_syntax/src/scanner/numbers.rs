//! Numeric literal scanning.
//!
//! Recognizes the schema language's integer forms (decimal, octal with a `0`
//! prefix, hex with a `0x`/`0X` prefix) and float forms (fraction and/or
//! exponent). A leading `.` starts a float only when number scanning is on,
//! and then requires at least one fractional digit; a trailing `.` after an
//! integer part is accepted with an empty fraction.

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::ScanError;
use crate::position::Position;

impl Scanner {
    /// Scan a number literal whose first rune `first` was already consumed.
    pub(super) fn scan_number_lit(
        &mut self,
        first: char,
        start: Position,
    ) -> Result<Token, ScanError> {
        let mut text = String::from(first);

        if first == '.' {
            self.scan_fraction(&mut text, true)?;
            self.scan_optional_exponent(&mut text)?;
            return Ok(Token::new(TokenKind::FloatLit, text, start));
        }

        if first == '0' {
            if matches!(self.reader.peek(), Some('x') | Some('X')) {
                let x = self.reader.read().unwrap_or_default();
                text.push(x);
                let digits = self.scan_digit_run(&mut text, |c| c.is_ascii_hexdigit());
                if digits == 0 {
                    return Err(self.unexpected_here("hex digit"));
                }
                return Ok(Token::new(TokenKind::IntLit, text, start));
            }

            self.scan_digit_run(&mut text, |c| ('0'..='7').contains(&c));
            return self.finish_int_or_float(text, start);
        }

        self.scan_digit_run(&mut text, |c| c.is_ascii_digit());
        self.finish_int_or_float(text, start)
    }

    /// After the integer part, branch into a float on `.` or an exponent.
    fn finish_int_or_float(&mut self, mut text: String, start: Position) -> Result<Token, ScanError> {
        match self.reader.peek() {
            Some('.') => {
                let dot = self.reader.read().unwrap_or_default();
                text.push(dot);
                self.scan_fraction(&mut text, false)?;
                self.scan_optional_exponent(&mut text)?;
                Ok(Token::new(TokenKind::FloatLit, text, start))
            }
            Some('e') | Some('E') => {
                self.scan_exponent(&mut text)?;
                Ok(Token::new(TokenKind::FloatLit, text, start))
            }
            _ => Ok(Token::new(TokenKind::IntLit, text, start)),
        }
    }

    /// Scan the digits after a `.`, optionally requiring at least one.
    fn scan_fraction(&mut self, text: &mut String, require_digit: bool) -> Result<(), ScanError> {
        let digits = self.scan_digit_run(text, |c| c.is_ascii_digit());
        if require_digit && digits == 0 {
            return Err(self.unexpected_here("digit"));
        }
        Ok(())
    }

    fn scan_optional_exponent(&mut self, text: &mut String) -> Result<(), ScanError> {
        if matches!(self.reader.peek(), Some('e') | Some('E')) {
            self.scan_exponent(text)?;
        }
        Ok(())
    }

    /// Scan `("e"|"E") ["+"|"-"] digit { digit }`; the `e` is still unread.
    fn scan_exponent(&mut self, text: &mut String) -> Result<(), ScanError> {
        let e = self.reader.read().unwrap_or_default();
        text.push(e);
        if matches!(self.reader.peek(), Some('+') | Some('-')) {
            let sign = self.reader.read().unwrap_or_default();
            text.push(sign);
        }
        let digits = self.scan_digit_run(text, |c| c.is_ascii_digit());
        if digits == 0 {
            return Err(self.unexpected_here("digit"));
        }
        Ok(())
    }

    /// Consume a run of runes accepted by `accept`, returning how many.
    fn scan_digit_run(&mut self, text: &mut String, accept: fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.reader.read() {
            if accept(c) {
                text.push(c);
                count += 1;
            } else {
                self.reader.unread(c);
                break;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Mode, Scanner, TokenKind};

    fn scan_one(source: &str) -> (TokenKind, String) {
        let mut s = Scanner::new(source, "");
        s.mode = Mode::NUMBER_LIT;
        let t = s.scan().unwrap();
        (t.kind, t.text)
    }

    #[test]
    fn test_decimal_int() {
        assert_eq!(scan_one("42"), (TokenKind::IntLit, "42".to_string()));
        assert_eq!(scan_one("1"), (TokenKind::IntLit, "1".to_string()));
    }

    #[test]
    fn test_octal_int() {
        assert_eq!(scan_one("0"), (TokenKind::IntLit, "0".to_string()));
        assert_eq!(scan_one("0755"), (TokenKind::IntLit, "0755".to_string()));
    }

    #[test]
    fn test_hex_int() {
        assert_eq!(scan_one("0x1F"), (TokenKind::IntLit, "0x1F".to_string()));
        assert_eq!(scan_one("0XaB"), (TokenKind::IntLit, "0XaB".to_string()));
    }

    #[test]
    fn test_hex_requires_digit() {
        let mut s = Scanner::new("0x;", "");
        s.mode = Mode::NUMBER_LIT;
        let err = s.scan().unwrap_err();
        assert!(err.expected.contains("hex digit"));
    }

    #[test]
    fn test_floats() {
        assert_eq!(scan_one("3.14"), (TokenKind::FloatLit, "3.14".to_string()));
        assert_eq!(scan_one("0.5"), (TokenKind::FloatLit, "0.5".to_string()));
        assert_eq!(scan_one(".5"), (TokenKind::FloatLit, ".5".to_string()));
        assert_eq!(scan_one("1."), (TokenKind::FloatLit, "1.".to_string()));
        assert_eq!(scan_one("1e10"), (TokenKind::FloatLit, "1e10".to_string()));
        assert_eq!(scan_one("2.5e-3"), (TokenKind::FloatLit, "2.5e-3".to_string()));
        assert_eq!(scan_one("1.E+2"), (TokenKind::FloatLit, "1.E+2".to_string()));
    }

    #[test]
    fn test_leading_dot_requires_fraction_digit() {
        let mut s = Scanner::new(". ", "");
        s.mode = Mode::NUMBER_LIT;
        let err = s.scan().unwrap_err();
        assert_eq!(err.expected, "digit");
    }

    #[test]
    fn test_exponent_requires_digits() {
        let mut s = Scanner::new("1e;", "");
        s.mode = Mode::NUMBER_LIT;
        let err = s.scan().unwrap_err();
        assert_eq!(err.expected, "digit");
    }

    #[test]
    fn test_dot_without_number_mode_is_punctuation() {
        let mut s = Scanner::new(".5", "");
        s.mode = Mode::IDENT;
        assert_eq!(s.scan().unwrap().kind, TokenKind::Dot);
    }
}
