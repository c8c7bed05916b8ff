//! Recursive-descent parser for schema files.
//!
//! Drives the [`crate::lexer::Lexer`] and assembles the declaration-ordered
//! AST, attaching comments along the way (leading, trailing-inline, and
//! behind-left-brace).
//!
//! ## Examples
//!
//! ```rust
//! use protosyn_syntax::parser::{ParseOptions, parse};
//!
//! let proto = parse("syntax = \"proto3\";", &ParseOptions::default()).unwrap();
//! assert_eq!(proto.syntax.unwrap().version, "proto3");
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, strip_quotes};
use crate::position::Position;
use crate::scanner::{Keyword, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all
// parser methods in the same Rust module (preserving privacy + call patterns)
// while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/comment.rs");
include!("parser/proto.rs");
include!("parser/message.rs");
include!("parser/field.rs");
include!("parser/enums.rs");
include!("parser/service.rs");
include!("parser/option.rs");
include!("parser/reserved.rs");
include!("parser/tests.rs");
