//! Token types and the keyword vocabulary for the schema scanner.
//!
//! The scanner uses a registry-backed keyword id: identifiers are looked up in
//! the reserved-word table only when the active [`Mode`](super::Mode) includes
//! keyword recognition. This keeps spellings like `message` usable as plain
//! identifiers at read sites that opt out.

use std::fmt;

use crate::position::Position;

/// Stable identifier for every reserved schema keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Syntax,
    Edition,
    Service,
    Rpc,
    Returns,
    Message,
    Extend,
    Import,
    Package,
    Option,
    Repeated,
    Required,
    Optional,
    Weak,
    Public,
    Oneof,
    Map,
    Reserved,
    Extensions,
    Enum,
    Stream,
    Group,
    Declaration,
    Number,
    FullName,
    Type,
}

impl Keyword {
    /// Resolve an identifier spelling to a keyword id, if reserved.
    pub fn from_str(spelling: &str) -> Option<Keyword> {
        Some(match spelling {
            "syntax" => Keyword::Syntax,
            "edition" => Keyword::Edition,
            "service" => Keyword::Service,
            "rpc" => Keyword::Rpc,
            "returns" => Keyword::Returns,
            "message" => Keyword::Message,
            "extend" => Keyword::Extend,
            "import" => Keyword::Import,
            "package" => Keyword::Package,
            "option" => Keyword::Option,
            "repeated" => Keyword::Repeated,
            "required" => Keyword::Required,
            "optional" => Keyword::Optional,
            "weak" => Keyword::Weak,
            "public" => Keyword::Public,
            "oneof" => Keyword::Oneof,
            "map" => Keyword::Map,
            "reserved" => Keyword::Reserved,
            "extensions" => Keyword::Extensions,
            "enum" => Keyword::Enum,
            "stream" => Keyword::Stream,
            "group" => Keyword::Group,
            "declaration" => Keyword::Declaration,
            "number" => Keyword::Number,
            "full_name" => Keyword::FullName,
            "type" => Keyword::Type,
            _ => return None,
        })
    }

    /// Canonical spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Syntax => "syntax",
            Keyword::Edition => "edition",
            Keyword::Service => "service",
            Keyword::Rpc => "rpc",
            Keyword::Returns => "returns",
            Keyword::Message => "message",
            Keyword::Extend => "extend",
            Keyword::Import => "import",
            Keyword::Package => "package",
            Keyword::Option => "option",
            Keyword::Repeated => "repeated",
            Keyword::Required => "required",
            Keyword::Optional => "optional",
            Keyword::Weak => "weak",
            Keyword::Public => "public",
            Keyword::Oneof => "oneof",
            Keyword::Map => "map",
            Keyword::Reserved => "reserved",
            Keyword::Extensions => "extensions",
            Keyword::Enum => "enum",
            Keyword::Stream => "stream",
            Keyword::Group => "group",
            Keyword::Declaration => "declaration",
            Keyword::Number => "number",
            Keyword::FullName => "full_name",
            Keyword::Type => "type",
        }
    }
}

/// Kind of token produced by the scanner.
///
/// ## Notes
/// - `Illegal` is the "nothing recognized" kind: it is what the lexer reports
///   after a pushback, and what the scanner returns for an unmapped rune.
/// - Quote characters surface as `Quote` only when string scanning is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Illegal,
    Ident,
    IntLit,
    FloatLit,
    BoolLit,
    StrLit,
    Comment,
    Keyword(Keyword),

    Semicolon,
    Colon,
    Eq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Lt,
    Gt,
    Comma,
    Dot,
    Minus,
    Quote,
}

impl TokenKind {
    /// Map a single rune to its punctuation kind, if any.
    pub(crate) fn from_misc_rune(r: char) -> Option<TokenKind> {
        Some(match r {
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Eq,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '"' | '\'' => TokenKind::Quote,
            _ => return None,
        })
    }

    pub fn is_keyword(self, k: Keyword) -> bool {
        self == TokenKind::Keyword(k)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "illegal",
            TokenKind::Ident => "ident",
            TokenKind::IntLit => "intLit",
            TokenKind::FloatLit => "floatLit",
            TokenKind::BoolLit => "boolLit",
            TokenKind::StrLit => "strLit",
            TokenKind::Comment => "comment",
            TokenKind::Keyword(k) => return write!(f, "{}", k.as_str()),
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Quote => "quote",
        };
        write!(f, "{}", name)
    }
}

/// A scanned token: kind, raw text, and the position of its first rune.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

/// Scanner mode: a bit set selecting which literal classes are recognized.
///
/// ## Notes
/// - Identifier scanning itself always runs; the mode decides classification.
///   With only [`Mode::IDENT`] set, a spelling like `true` or `message` comes
///   back as a plain `Ident` token. Callers that want keyword or boolean
///   recognition must set the corresponding bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode(u8);

impl Mode {
    pub const IDENT: Mode = Mode(1);
    pub const NUMBER_LIT: Mode = Mode(1 << 1);
    pub const STR_LIT: Mode = Mode(1 << 2);
    pub const BOOL_LIT: Mode = Mode(1 << 3);
    pub const KEYWORD: Mode = Mode(1 << 4);
    pub const COMMENT: Mode = Mode(1 << 5);

    /// All literal classes at once: number, string, and boolean.
    pub const LIT: Mode = Mode(Self::NUMBER_LIT.0 | Self::STR_LIT.0 | Self::BOOL_LIT.0);

    pub fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_registry_round_trips() {
        let all = [
            Keyword::Syntax,
            Keyword::Edition,
            Keyword::Service,
            Keyword::Rpc,
            Keyword::Returns,
            Keyword::Message,
            Keyword::Extend,
            Keyword::Import,
            Keyword::Package,
            Keyword::Option,
            Keyword::Repeated,
            Keyword::Required,
            Keyword::Optional,
            Keyword::Weak,
            Keyword::Public,
            Keyword::Oneof,
            Keyword::Map,
            Keyword::Reserved,
            Keyword::Extensions,
            Keyword::Enum,
            Keyword::Stream,
            Keyword::Group,
            Keyword::Declaration,
            Keyword::Number,
            Keyword::FullName,
            Keyword::Type,
        ];
        for k in all {
            assert_eq!(Keyword::from_str(k.as_str()), Some(k));
        }
        assert_eq!(Keyword::from_str("messages"), None);
        assert_eq!(Keyword::from_str("Syntax"), None);
    }

    #[test]
    fn test_mode_bit_set() {
        let m = Mode::KEYWORD | Mode::STR_LIT;
        assert!(m.contains(Mode::KEYWORD));
        assert!(m.contains(Mode::STR_LIT));
        assert!(!m.contains(Mode::COMMENT));
        assert!(Mode::LIT.contains(Mode::NUMBER_LIT | Mode::BOOL_LIT));
    }

    #[test]
    fn test_misc_rune_map() {
        assert_eq!(TokenKind::from_misc_rune(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::from_misc_rune('"'), Some(TokenKind::Quote));
        assert_eq!(TokenKind::from_misc_rune('\''), Some(TokenKind::Quote));
        assert_eq!(TokenKind::from_misc_rune('+'), None);
        assert_eq!(TokenKind::from_misc_rune('@'), None);
    }
}
