//! Syntax frontend for Protocol Buffers schema files: scanner, lexer,
//! parser, AST, visitor, diagnostics.
//!
//! Parses proto2 and proto3 sources (plus the `edition` form) into a
//! declaration-ordered AST that keeps line/column provenance for every
//! construct and attaches comments (leading, trailing-inline, and
//! behind-left-brace). There is no semantic validation here: duplicate field
//! numbers, unresolved type references, and the like are downstream concerns.
//!
//! ## Notes
//! - Token recognition is mode-keyed: a spelling like `message` is a keyword
//!   only at read sites that opt in, and a plain identifier everywhere else.
//! - The `permissive` option admits the vendor-extension bundle found in
//!   public schema corpora; see [`parser::ParseOptions`].
//!
//! ## Examples
//! ```rust
//! use protosyn_syntax::parser::{ParseOptions, parse};
//!
//! let proto = parse(
//!     "syntax = \"proto3\"; message M { int32 a = 1; }",
//!     &ParseOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(proto.body.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod reader;
pub mod scanner;
pub mod visitor;

pub use ast::Proto;
pub use diagnostics::{ParseError, ScanError};
pub use parser::{ParseOptions, parse, parse_reader};
pub use position::Position;
pub use visitor::{Visitee, Visitor};
