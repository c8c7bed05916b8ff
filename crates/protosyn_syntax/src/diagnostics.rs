//! Error types for scanning and parsing.
//!
//! Two shapes cover the whole frontend:
//!
//! - [`ScanError`]: a character-level failure (bad escape, unterminated
//!   comment or string, malformed number) with the offending text, the
//!   expected character class, and the position.
//! - [`ParseError`]: a token-level failure. The rendered message follows
//!   `found "<token>" but expected [<description>]`; when the parser runs
//!   with `debug` enabled, an ` at <file>:<line>` suffix names the Rust
//!   source site that raised the error (captured via `#[track_caller]`).
//!
//! Errors from attempted-then-recovered grammar alternatives are combined
//! into [`ParseError::Alternatives`] so both failed branches stay visible.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::position::Position;

/// A character-level scanner failure.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("found \"{found}\" but expected [{expected}] at {pos}")]
#[diagnostic(code(protosyn::scan))]
pub struct ScanError {
    /// Text of the offending rune, or `<eof>` when input ended.
    pub found: String,
    /// Description of the expected character class.
    pub expected: String,
    /// Where the offending rune sits in the input.
    pub pos: Position,
}

impl ScanError {
    pub(crate) fn new(found: impl Into<String>, expected: impl Into<String>, pos: Position) -> Self {
        Self {
            found: found.into(),
            expected: expected.into(),
            pos,
        }
    }

    pub(crate) fn eof(expected: impl Into<String>, pos: Position) -> Self {
        Self::new("<eof>", expected, pos)
    }
}

/// The Rust source location that raised a parse error, rendered only when
/// the parser runs in debug mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSite(Option<String>);

impl fmt::Display for ErrorSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(site) => write!(f, " at {}", site),
            None => Ok(()),
        }
    }
}

/// A token-level parser failure.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// The scanner failed underneath the parser.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),

    /// A grammar production met a token it cannot accept.
    #[error("found \"{found}\" but expected [{expected}]{site}")]
    #[diagnostic(code(protosyn::parse))]
    UnexpectedToken {
        /// Raw text of the offending token.
        found: String,
        /// Description of the expected terminal or nonterminal.
        expected: String,
        /// Position of the offending token in the input.
        pos: Position,
        site: ErrorSite,
    },

    /// Both branches of a recovered grammar alternative failed.
    #[error("{first}; {second}")]
    #[diagnostic(code(protosyn::parse::alternatives))]
    Alternatives {
        first: Box<ParseError>,
        second: Box<ParseError>,
    },

    /// The input source could not be read.
    #[error("failed to read input: {0}")]
    #[diagnostic(code(protosyn::io))]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Build an unexpected-token error, capturing the caller as the error
    /// site when `debug` is set.
    #[track_caller]
    pub(crate) fn unexpected(
        found: impl Into<String>,
        expected: impl Into<String>,
        pos: Position,
        debug: bool,
    ) -> ParseError {
        let site = if debug {
            let loc = std::panic::Location::caller();
            ErrorSite(Some(format!("{}:{}", loc.file(), loc.line())))
        } else {
            ErrorSite(None)
        };
        ParseError::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            pos,
            site,
        }
    }

    pub(crate) fn alternatives(first: ParseError, second: ParseError) -> ParseError {
        ParseError::Alternatives {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_message_format() {
        let err = ScanError::new("!", "/ or *", Position::start_of("a.proto"));
        assert_eq!(err.to_string(), "found \"!\" but expected [/ or *] at a.proto:1:1");
    }

    #[test]
    fn test_parse_error_message_without_site() {
        let err = ParseError::unexpected("}", ";", Position::start_of(""), false);
        assert_eq!(err.to_string(), "found \"}\" but expected [;]");
    }

    #[test]
    fn test_parse_error_message_with_site() {
        let err = ParseError::unexpected("}", ";", Position::start_of(""), true);
        let rendered = err.to_string();
        assert!(rendered.starts_with("found \"}\" but expected [;] at "));
        assert!(rendered.contains("diagnostics.rs"));
    }

    #[test]
    fn test_alternatives_name_both_branches() {
        let first = ParseError::unexpected("x", "field", Position::start_of(""), false);
        let second = ParseError::unexpected("x", ";", Position::start_of(""), false);
        let combined = ParseError::alternatives(first, second);
        assert_eq!(
            combined.to_string(),
            "found \"x\" but expected [field]; found \"x\" but expected [;]"
        );
    }
}
