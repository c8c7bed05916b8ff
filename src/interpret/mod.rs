//! Structural transforms over a parsed tree.
//!
//! ## Modules
//!
//! - `unordered` - Re-buckets every block body into per-kind lists while
//!   preserving the source order within each kind.

pub mod unordered;
