//! Composite reads built on the single-token primitives.
//!
//! These consume multi-token shapes that several grammar productions share:
//! dotted identifiers, message/enum type references, constants, and the empty
//! statement. On a leading-token mismatch the offending token is pushed back
//! before the error returns, so callers can try the next grammar alternative
//! from the same point.

use super::Lexer;
use crate::diagnostics::ParseError;
use crate::position::Position;
use crate::scanner::TokenKind;

impl Lexer {
    /// Read `ident { "." ident }` and return the joined text.
    pub fn read_full_ident(&mut self) -> Result<(String, Position), ParseError> {
        self.next()?;
        if self.token != TokenKind::Ident {
            let err = self.unexpected("fullIdent");
            self.un_next();
            return Err(err);
        }
        let start = self.pos.clone();
        let mut full = self.text.clone();
        loop {
            self.next()?;
            if self.token != TokenKind::Dot {
                self.un_next();
                break;
            }
            self.next()?;
            if self.token != TokenKind::Ident {
                return Err(self.unexpected("ident"));
            }
            full.push('.');
            full.push_str(&self.text);
        }
        Ok((full, start))
    }

    /// Read `[ "." ] ident { "." ident }`, the type reference form.
    pub fn read_message_type(&mut self) -> Result<(String, Position), ParseError> {
        self.next()?;
        let start = self.pos.clone();
        let mut name = String::new();
        match self.token {
            TokenKind::Dot => {
                name.push('.');
                self.next()?;
                if self.token != TokenKind::Ident {
                    let err = self.unexpected("ident");
                    self.un_next();
                    return Err(err);
                }
                name.push_str(&self.text);
            }
            TokenKind::Ident => name.push_str(&self.text),
            _ => {
                let err = self.unexpected("messageType");
                self.un_next();
                return Err(err);
            }
        }
        loop {
            self.next()?;
            if self.token != TokenKind::Dot {
                self.un_next();
                break;
            }
            self.next()?;
            if self.token != TokenKind::Ident {
                return Err(self.unexpected("ident"));
            }
            name.push('.');
            name.push_str(&self.text);
        }
        Ok((name, start))
    }

    /// Read an enum type reference; same shape as a message type.
    pub fn read_enum_type(&mut self) -> Result<(String, Position), ParseError> {
        self.read_message_type()
    }

    /// Read a constant: full ident, boolean, number (possibly signed), or a
    /// string literal.
    ///
    /// In permissive mode consecutive string literals concatenate into one:
    /// the parts lose their outer quotes, are joined, and a single quote
    /// character of the first literal's kind is placed at each end.
    pub fn read_constant(&mut self, permissive: bool) -> Result<(String, Position), ParseError> {
        self.next_lit()?;
        let start = self.pos.clone();
        match self.token {
            TokenKind::StrLit => {
                if permissive {
                    self.merge_multiline_str_lits(start)
                } else {
                    Ok((self.text.clone(), start))
                }
            }
            TokenKind::BoolLit | TokenKind::IntLit | TokenKind::FloatLit => {
                Ok((self.text.clone(), start))
            }
            TokenKind::Ident => {
                // The constant is a (possibly dotted) identifier.
                self.un_next();
                let (full, pos) = self.read_full_ident()?;
                Ok((full, pos))
            }
            TokenKind::Minus => self.read_signed_number("-", start),
            // `+` has no punctuation kind; it surfaces as an illegal token.
            TokenKind::Illegal if self.text == "+" => self.read_signed_number("+", start),
            _ => {
                let err = self.unexpected("constant");
                self.un_next();
                Err(err)
            }
        }
    }

    fn read_signed_number(
        &mut self,
        sign: &str,
        start: Position,
    ) -> Result<(String, Position), ParseError> {
        self.next_number_lit()?;
        match self.token {
            TokenKind::IntLit | TokenKind::FloatLit => Ok((format!("{}{}", sign, self.text), start)),
            _ => Err(self.unexpected("intLit or floatLit")),
        }
    }

    /// Concatenate the current string literal with any literals that follow.
    fn merge_multiline_str_lits(
        &mut self,
        start: Position,
    ) -> Result<(String, Position), ParseError> {
        let quote = self.text.chars().next().unwrap_or('"');
        let mut merged = strip_quotes(&self.text).to_string();
        loop {
            self.next_str_lit()?;
            if self.token == TokenKind::StrLit {
                merged.push_str(strip_quotes(&self.text));
            } else {
                self.un_next();
                break;
            }
        }
        Ok((format!("{quote}{merged}{quote}"), start))
    }

    /// Succeed only on `;`; push anything else back.
    pub fn read_empty_statement(&mut self) -> Result<(), ParseError> {
        self.next()?;
        if self.token == TokenKind::Semicolon {
            Ok(())
        } else {
            let err = self.unexpected(";");
            self.un_next();
            Err(err)
        }
    }
}

/// Drop the first and last character of a quoted literal.
pub(crate) fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
