//! Comment scanning.
//!
//! Line comments run from `//` to the end of the line, excluding the newline
//! itself. Block comments run from `/*` to the next `*/` and may span lines;
//! reaching end of input first is an error. The token text keeps the
//! delimiters.

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::ScanError;
use crate::position::Position;

impl Scanner {
    /// Scan a comment whose leading `/` was already consumed.
    pub(super) fn scan_comment(&mut self, start: Position) -> Result<Token, ScanError> {
        let mut text = String::from('/');
        let pos = self.reader.pos();
        match self.reader.read() {
            Some('/') => {
                text.push('/');
                while let Some(c) = self.reader.read() {
                    if c == '\n' {
                        self.reader.unread(c);
                        break;
                    }
                    text.push(c);
                }
                Ok(Token::new(TokenKind::Comment, text, start))
            }
            Some('*') => {
                text.push('*');
                loop {
                    let Some(c) = self.reader.read() else {
                        return Err(ScanError::eof("*/", self.reader.pos()));
                    };
                    text.push(c);
                    if c == '*' && self.reader.peek() == Some('/') {
                        let close = self.reader.read().unwrap_or_default();
                        text.push(close);
                        return Ok(Token::new(TokenKind::Comment, text, start));
                    }
                }
            }
            Some(other) => {
                self.reader.unread(other);
                Err(ScanError::new(other.to_string(), "/ or *", pos))
            }
            None => Err(ScanError::eof("/ or *", pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Mode, Scanner, TokenKind};

    fn scan_comment(source: &str) -> Result<String, crate::diagnostics::ScanError> {
        let mut s = Scanner::new(source, "");
        s.mode = Mode::COMMENT;
        s.scan().map(|t| {
            assert_eq!(t.kind, TokenKind::Comment);
            t.text
        })
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        assert_eq!(scan_comment("// hello\nnext").unwrap(), "// hello");
        assert_eq!(scan_comment("// at eof").unwrap(), "// at eof");
    }

    #[test]
    fn test_block_comment_single_line() {
        assert_eq!(scan_comment("/* x */").unwrap(), "/* x */");
        assert_eq!(scan_comment("/**/").unwrap(), "/**/");
    }

    #[test]
    fn test_block_comment_multi_line() {
        assert_eq!(scan_comment("/* a\n * b\n */").unwrap(), "/* a\n * b\n */");
    }

    #[test]
    fn test_block_comment_with_stars() {
        assert_eq!(scan_comment("/* ** */").unwrap(), "/* ** */");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = scan_comment("/* never ends").unwrap_err();
        assert_eq!(err.expected, "*/");
        assert_eq!(err.found, "<eof>");
    }

    #[test]
    fn test_slash_without_comment_is_error() {
        let mut s = Scanner::new("/x", "");
        s.mode = Mode::COMMENT;
        let err = s.scan().unwrap_err();
        assert_eq!(err.expected, "/ or *");
        assert_eq!(err.found, "x");
    }
}
