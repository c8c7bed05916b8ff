//! Mode-switched scanner for schema source text.
//!
//! Produces typed tokens from the character reader. Recognition is keyed by a
//! [`Mode`] bit set: the same spelling can come back as an identifier, a
//! keyword, or a boolean literal depending on which bits the caller set
//! before scanning.
//!
//! ## Module Structure
//!
//! - `tokens` - Token kinds, the keyword registry, and the mode bit set
//! - `numbers` - Integer and float literal scanning
//! - `strings` - String literal scanning with escape validation
//! - `comments` - Line and block comment scanning

mod comments;
mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Keyword, Mode, Token, TokenKind};

use crate::diagnostics::ScanError;
use crate::position::Position;
use crate::reader::Reader;

/// Scanner over a fully-buffered input.
///
/// Owns the character reader (and through it the live position). The active
/// [`Mode`] is public so the lexer can scope it per read site.
pub struct Scanner {
    reader: Reader,
    pub mode: Mode,
}

impl Scanner {
    pub fn new(source: &str, filename: &str) -> Self {
        Self {
            reader: Reader::new(source, filename),
            mode: Mode::IDENT,
        }
    }

    /// Snapshot of the reader's current position.
    pub fn pos(&self) -> Position {
        self.reader.pos()
    }

    /// Raw runes consumed by the most recent scan.
    pub fn last_scan_raw(&self) -> Vec<char> {
        self.reader.last_scan_raw()
    }

    /// Replace the recorded raw runes, typically with a buffer captured from
    /// an earlier scan that is about to be pushed back.
    pub fn set_last_scan_raw(&mut self, raw: Vec<char>) {
        self.reader.set_last_scan_raw(raw);
    }

    /// Push the most recent scan's runes back onto the reader, in reverse,
    /// reverting the position to the token's start.
    pub fn unread_last_scan(&mut self) {
        let raw = self.reader.last_scan_raw();
        for &c in raw.iter().rev() {
            self.reader.unread(c);
        }
    }

    /// Scan the next token under the active mode.
    ///
    /// The raw log is reset once per call, so it covers everything this scan
    /// consumed: skipped whitespace, swallowed comments, and the token
    /// itself. Replaying it in reverse therefore restores the reader exactly,
    /// which is what keeps multi-token pushback (`peek_n`, the group
    /// lookahead) from gluing adjacent tokens together.
    pub fn scan(&mut self) -> Result<Token, ScanError> {
        self.reader.clear_raw();
        loop {
            let start = self.reader.pos();
            let Some(c) = self.reader.read() else {
                return Ok(Token::new(TokenKind::Eof, "", start));
            };

            if c.is_whitespace() {
                continue;
            }

            if is_letter(c) {
                return Ok(self.scan_ident(c, start));
            }

            if c == '/' {
                let comment = self.scan_comment(start)?;
                if self.mode.contains(Mode::COMMENT) {
                    return Ok(comment);
                }
                // Comment recognition is off: swallow it and keep scanning.
                continue;
            }

            if (c == '\'' || c == '"') && self.mode.contains(Mode::STR_LIT) {
                return self.scan_str_lit(c, start);
            }

            if c.is_ascii_digit() || (c == '.' && self.mode.contains(Mode::NUMBER_LIT)) {
                return self.scan_number_lit(c, start);
            }

            return Ok(match TokenKind::from_misc_rune(c) {
                Some(kind) => Token::new(kind, c.to_string(), start),
                None => Token::new(TokenKind::Illegal, c.to_string(), start),
            });
        }
    }

    /// Scan `letter { letter | digit | "_" }`, then classify under the mode.
    fn scan_ident(&mut self, first: char, start: Position) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.reader.read() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
            } else {
                self.reader.unread(c);
                break;
            }
        }

        let kind = if self.mode.contains(Mode::BOOL_LIT) && (text == "true" || text == "false") {
            TokenKind::BoolLit
        } else if self.mode.contains(Mode::NUMBER_LIT) && (text == "inf" || text == "nan") {
            TokenKind::FloatLit
        } else if self.mode.contains(Mode::KEYWORD) {
            match Keyword::from_str(&text) {
                Some(k) => TokenKind::Keyword(k),
                None => TokenKind::Ident,
            }
        } else {
            TokenKind::Ident
        };
        Token::new(kind, text, start)
    }

    /// Build a scan error from the rune at the current read point.
    fn unexpected_here(&mut self, expected: &str) -> ScanError {
        let pos = self.reader.pos();
        match self.reader.peek() {
            Some(c) => ScanError::new(c.to_string(), expected, pos),
            None => ScanError::eof(expected, pos),
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(source: &str, mode: Mode) -> Vec<Token> {
        let mut s = Scanner::new(source, "");
        s.mode = mode;
        let mut out = Vec::new();
        loop {
            let t = s.scan().unwrap();
            let done = t.kind == TokenKind::Eof;
            out.push(t);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_ident_without_keyword_mode() {
        let tokens = scan_all("message true", Mode::IDENT);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "message");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "true");
    }

    #[test]
    fn test_keyword_mode_classifies() {
        let tokens = scan_all("message foo", Mode::KEYWORD);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Message));
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_bool_mode_classifies() {
        let tokens = scan_all("true false truthy", Mode::BOOL_LIT);
        assert_eq!(tokens[0].kind, TokenKind::BoolLit);
        assert_eq!(tokens[1].kind, TokenKind::BoolLit);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn test_inf_and_nan_under_number_mode() {
        let tokens = scan_all("inf nan", Mode::NUMBER_LIT);
        assert_eq!(tokens[0].kind, TokenKind::FloatLit);
        assert_eq!(tokens[1].kind, TokenKind::FloatLit);
        let tokens = scan_all("inf", Mode::IDENT);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
    }

    #[test]
    fn test_punctuation_map() {
        let tokens = scan_all("; : = ( ) [ ] { } < > , . -", Mode::IDENT);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            &kinds[..14],
            &[
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Eq,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
            ]
        );
    }

    #[test]
    fn test_quote_without_string_mode() {
        let tokens = scan_all("\"", Mode::IDENT);
        assert_eq!(tokens[0].kind, TokenKind::Quote);
    }

    #[test]
    fn test_unmapped_rune_is_illegal() {
        let tokens = scan_all("@", Mode::IDENT);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "@");
    }

    #[test]
    fn test_comment_skipped_without_comment_mode() {
        let tokens = scan_all("// hi\nfoo", Mode::IDENT);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "foo");
    }

    #[test]
    fn test_comment_returned_with_comment_mode() {
        let tokens = scan_all("// hi\nfoo", Mode::COMMENT);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "// hi");
    }

    #[test]
    fn test_start_positions_strictly_increase() {
        let source = "syntax = \"proto3\";\nmessage M { int32 a = 1; }";
        let mut s = Scanner::new(source, "");
        s.mode = Mode::KEYWORD | Mode::LIT;
        let mut last = None;
        loop {
            let t = s.scan().unwrap();
            if t.kind == TokenKind::Eof {
                break;
            }
            if let Some(prev) = last {
                assert!(t.pos.offset > prev, "offsets must strictly increase");
            }
            last = Some(t.pos.offset);
        }
    }

    #[test]
    fn test_raw_log_covers_scan_extent() {
        let mut s = Scanner::new("  hello  world", "");
        let t = s.scan().unwrap();
        assert_eq!(t.text, "hello");
        // Raw log covers the skipped whitespace and the token.
        assert_eq!(s.last_scan_raw(), "  hello".chars().collect::<Vec<_>>());
        assert_eq!(s.pos().offset, s.last_scan_raw().len());
        // The next scan resets the log.
        let t = s.scan().unwrap();
        assert_eq!(t.text, "world");
        assert_eq!(s.last_scan_raw(), "  world".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_unread_two_scans_rescans_identically() {
        let mut s = Scanner::new("optional group", "");
        let t1 = s.scan().unwrap();
        let raw1 = s.last_scan_raw();
        let t2 = s.scan().unwrap();
        // Push both back, most recent first.
        s.unread_last_scan();
        s.set_last_scan_raw(raw1);
        s.unread_last_scan();
        assert_eq!(s.scan().unwrap(), t1);
        assert_eq!(s.scan().unwrap(), t2);
    }

    #[test]
    fn test_unread_last_scan_allows_rescan() {
        let mut s = Scanner::new("foo bar", "");
        let t1 = s.scan().unwrap();
        s.unread_last_scan();
        let t2 = s.scan().unwrap();
        assert_eq!(t1, t2);
    }
}
