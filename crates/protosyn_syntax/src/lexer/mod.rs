//! Lexer façade over the scanner.
//!
//! The lexer owns the scanner and a single current-token slot (`token`,
//! `text`, `pos`). Reads are mode-scoped: each `next_*` method sets the
//! scanner mode for exactly one scan and restores it afterwards, so keyword,
//! boolean, and literal recognition are decided per read site.
//!
//! Pushback works by raw replay: the runes of the most recent scan are pushed
//! back onto the reader in reverse, which makes the unscan depth unbounded
//! (`peek_n`, the group lookahead) rather than one token.
//!
//! ## Module Structure
//!
//! - `reads` - Composite reads (full ident, message type, constant, empty
//!   statement)

mod reads;

pub(crate) use reads::strip_quotes;

use crate::diagnostics::ParseError;
use crate::position::Position;
use crate::scanner::{Mode, Scanner, TokenKind};

/// Lexer state: the scanner plus the most recent token.
pub struct Lexer {
    scanner: Scanner,
    /// Kind of the most recent scan; [`TokenKind::Illegal`] after a pushback.
    pub token: TokenKind,
    /// Raw text of the most recent scan.
    pub text: String,
    /// Start position of the most recent scan.
    pub pos: Position,
    debug: bool,
}

impl Lexer {
    pub fn new(source: &str, filename: &str, debug: bool) -> Self {
        let scanner = Scanner::new(source, filename);
        let pos = scanner.pos();
        Self {
            scanner,
            token: TokenKind::Illegal,
            text: String::new(),
            pos,
            debug,
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    // ========================================================================
    // Mode-scoped reads
    // ========================================================================

    /// Scan the next token with plain identifier recognition.
    ///
    /// Keyword spellings come back as `Ident` here; use [`next_keyword`] at
    /// sites that dispatch on keywords.
    ///
    /// [`next_keyword`]: Lexer::next_keyword
    pub fn next(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::IDENT)
    }

    pub fn next_keyword(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::KEYWORD)
    }

    pub fn next_lit(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::LIT)
    }

    pub fn next_str_lit(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::STR_LIT)
    }

    pub fn next_number_lit(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::NUMBER_LIT)
    }

    pub fn next_comment(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::COMMENT)
    }

    pub fn next_keyword_or_str_lit(&mut self) -> Result<(), ParseError> {
        self.next_with_mode(Mode::KEYWORD | Mode::STR_LIT)
    }

    fn next_with_mode(&mut self, mode: Mode) -> Result<(), ParseError> {
        let prev = self.scanner.mode;
        self.scanner.mode = mode;
        let result = self.scanner.scan();
        self.scanner.mode = prev;
        match result {
            Ok(tok) => {
                self.token = tok.kind;
                self.text = tok.text;
                self.pos = tok.pos;
                if self.debug {
                    eprintln!("lex: {} {:?} at {}", self.token, self.text, self.pos);
                }
                Ok(())
            }
            Err(err) => {
                // The runes consumed by the failed scan stay in the raw log,
                // so lookaheads can still restore the reader.
                self.token = TokenKind::Illegal;
                self.text = String::new();
                self.pos = self.scanner.pos();
                Err(ParseError::Scan(err))
            }
        }
    }

    // ========================================================================
    // Pushback
    // ========================================================================

    /// Un-scan the most recent token by replaying its raw runes, in reverse,
    /// back onto the reader. The current token becomes `Illegal`.
    pub fn un_next(&mut self) {
        self.scanner.unread_last_scan();
        self.token = TokenKind::Illegal;
    }

    /// Un-scan a token whose raw extent was captured earlier.
    pub fn un_next_to(&mut self, raw: Vec<char>) {
        self.scanner.set_last_scan_raw(raw);
        self.un_next();
    }

    /// Raw runes of the most recent scan, an opaque token-extent handle for
    /// [`un_next_to`].
    ///
    /// [`un_next_to`]: Lexer::un_next_to
    pub fn last_scan_raw(&self) -> Vec<char> {
        self.scanner.last_scan_raw()
    }

    /// Scan one token and push it straight back.
    pub fn peek(&mut self) -> Result<TokenKind, ParseError> {
        self.next()?;
        let token = self.token;
        self.un_next();
        Ok(token)
    }

    /// [`peek`] with keyword recognition on.
    ///
    /// [`peek`]: Lexer::peek
    pub fn peek_keyword(&mut self) -> Result<TokenKind, ParseError> {
        self.next_keyword()?;
        let token = self.token;
        self.un_next();
        Ok(token)
    }

    /// Scan up to `n` tokens, then push all of them back.
    pub fn peek_n(&mut self, n: usize) -> Result<Vec<TokenKind>, ParseError> {
        let mut kinds = Vec::with_capacity(n);
        let mut raws = Vec::with_capacity(n);
        let mut failure = None;
        for _ in 0..n {
            match self.next() {
                Ok(()) => {
                    kinds.push(self.token);
                    raws.push(self.last_scan_raw());
                }
                Err(err) => {
                    raws.push(self.last_scan_raw());
                    failure = Some(err);
                    break;
                }
            }
        }
        for raw in raws.into_iter().rev() {
            self.un_next_to(raw);
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(kinds),
        }
    }

    /// Advance over the next token iff it is `kind`.
    pub fn consume_token(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        self.next()?;
        if self.token == kind {
            Ok(true)
        } else {
            self.un_next();
            Ok(false)
        }
    }

    /// Build an unexpected-token error for the current token, capturing the
    /// caller as the error site in debug mode.
    #[track_caller]
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let found = if self.token == TokenKind::Eof {
            "<eof>".to_string()
        } else {
            self.text.clone()
        };
        ParseError::unexpected(found, expected, self.pos.clone(), self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Keyword;

    fn lexer(source: &str) -> Lexer {
        Lexer::new(source, "test.proto", false)
    }

    #[test]
    fn test_next_does_not_classify_keywords() {
        let mut lex = lexer("message");
        lex.next().unwrap();
        assert_eq!(lex.token, TokenKind::Ident);
        assert_eq!(lex.text, "message");
    }

    #[test]
    fn test_next_keyword_classifies() {
        let mut lex = lexer("message");
        lex.next_keyword().unwrap();
        assert_eq!(lex.token, TokenKind::Keyword(Keyword::Message));
    }

    #[test]
    fn test_un_next_then_rescan_is_identical() {
        let mut lex = lexer("foo = 1;");
        lex.next().unwrap();
        let first = (lex.token, lex.text.clone(), lex.pos.clone());
        lex.un_next();
        assert_eq!(lex.token, TokenKind::Illegal);
        lex.next().unwrap();
        assert_eq!((lex.token, lex.text.clone(), lex.pos.clone()), first);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lex = lexer("abc def");
        assert_eq!(lex.peek().unwrap(), TokenKind::Ident);
        lex.next().unwrap();
        assert_eq!(lex.text, "abc");
        lex.next().unwrap();
        assert_eq!(lex.text, "def");
    }

    #[test]
    fn test_peek_n_restores_all_tokens() {
        let mut lex = lexer("optional group G = 1 {");
        let kinds = lex.peek_n(4).unwrap();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eq,
            ]
        );
        lex.next().unwrap();
        assert_eq!(lex.text, "optional");
        assert_eq!(lex.pos.offset, 0);
    }

    #[test]
    fn test_consume_token() {
        let mut lex = lexer("; x");
        assert!(lex.consume_token(TokenKind::Semicolon).unwrap());
        assert!(!lex.consume_token(TokenKind::Semicolon).unwrap());
        lex.next().unwrap();
        assert_eq!(lex.text, "x");
    }

    #[test]
    fn test_mode_is_restored_after_scoped_read() {
        let mut lex = lexer("\"s\" \"t\"");
        lex.next_str_lit().unwrap();
        assert_eq!(lex.token, TokenKind::StrLit);
        // A plain next afterwards sees the quote as punctuation again.
        lex.next().unwrap();
        assert_eq!(lex.token, TokenKind::Quote);
    }

    #[test]
    fn test_un_next_across_scoped_reads() {
        let mut lex = lexer("true");
        lex.next_lit().unwrap();
        assert_eq!(lex.token, TokenKind::BoolLit);
        lex.un_next();
        lex.next().unwrap();
        assert_eq!(lex.token, TokenKind::Ident);
        assert_eq!(lex.text, "true");
    }

    #[test]
    fn test_eof_keeps_returning_eof() {
        let mut lex = lexer("");
        lex.next().unwrap();
        assert_eq!(lex.token, TokenKind::Eof);
        lex.un_next();
        lex.next().unwrap();
        assert_eq!(lex.token, TokenKind::Eof);
    }
}
