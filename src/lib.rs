#![forbid(unsafe_code)]
//! Protocol Buffers schema parser with position and comment fidelity.
//!
//! The parsing front-end (scanner, lexer, parser, AST, visitor) lives in the
//! `protosyn_syntax` crate and is re-exported here. This crate adds the
//! consumers: the CLI driver that JSON-prints a parsed tree, and the
//! unordered interpreter that re-buckets block bodies by declaration kind.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod interpret;

pub use protosyn_syntax::{ParseError, ParseOptions, Position, Proto, ScanError};
pub use protosyn_syntax::{Visitee, Visitor, ast, parse, parse_reader};

pub use interpret::unordered::{UnorderedProto, interpret_unordered};
