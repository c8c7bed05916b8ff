//! Source positions for tokens and AST nodes.
//!
//! A [`Position`] is a value snapshot (`filename`, byte `offset`, 1-based
//! `line`, 1-based `column`) attached to tokens, comments, and node metadata.
//! The live cursor is [`PositionTracker`], which can both advance over a rune
//! and revert over one; reverting across a newline restores the exact column
//! by consulting a per-line column map recorded on the way forward.
//!
//! ## Notes
//! - `offset` counts UTF-8 bytes; `column` counts characters.
//! - Rendering follows `<filename>:<line>:<column>`, with `<input>` standing
//!   in when no filename was supplied.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A snapshot of the cursor at the start (or end) of a lexical element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Name of the source file, or empty when parsing from memory.
    pub filename: String,
    /// UTF-8 byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number, in characters.
    pub column: usize,
}

impl Position {
    /// Position of the first character of a named input.
    pub fn start_of(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position reached by advancing through every rune of `text` except
    /// the last: the position *of* the final rune.
    ///
    /// Used to compute the end position of a multi-rune token (for example a
    /// block comment) without touching the live tracker.
    pub fn advanced_bulk(&self, text: &str) -> Position {
        let mut pos = self.clone();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if chars.peek().is_none() {
                break;
            }
            pos.offset += c.len_utf8();
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filename = if self.filename.is_empty() {
            "<input>"
        } else {
            &self.filename
        };
        write!(f, "{}:{}:{}", filename, self.line, self.column)
    }
}

/// The live cursor owned by the character reader.
///
/// ## Notes
/// - `advance`/`revert` are exact inverses; the column reached before each
///   newline is recorded so that reverting over `\n` restores it.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    filename: String,
    offset: usize,
    line: usize,
    column: usize,
    // Column the cursor stood at when the newline ending each line was read.
    columns_at_newline: HashMap<usize, usize>,
}

impl PositionTracker {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            offset: 0,
            line: 1,
            column: 1,
            columns_at_newline: HashMap::new(),
        }
    }

    /// Snapshot the cursor as a [`Position`] value.
    pub fn current(&self) -> Position {
        Position {
            filename: self.filename.clone(),
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Move the cursor forward over `r`.
    pub fn advance(&mut self, r: char) {
        self.offset += r.len_utf8();
        if r == '\n' {
            self.columns_at_newline.insert(self.line, self.column);
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Move the cursor backward over `r`, undoing a prior [`advance`].
    ///
    /// [`advance`]: PositionTracker::advance
    pub fn revert(&mut self, r: char) {
        self.offset -= r.len_utf8();
        if r == '\n' {
            self.line -= 1;
            self.column = self.columns_at_newline.get(&self.line).copied().unwrap_or(1);
        } else {
            self.column -= 1;
        }
    }
}
