//! CLI for the protosyn schema parser.
//!
//! Reads a schema file, parses it, and pretty-prints the resulting tree (or
//! its unordered view) as JSON on stdout.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use protosyn_syntax::parser::ParseOptions;

use crate::interpret::unordered::interpret_unordered;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse a Protocol Buffers schema file and print its AST as JSON.
#[derive(Parser, Debug)]
#[command(name = "protosyn")]
#[command(version)]
#[command(about = "Parse a .proto schema file and print its AST as JSON", long_about = None)]
pub struct Cli {
    /// Path to the .proto file to parse
    #[arg(long, value_name = "PATH")]
    pub proto: PathBuf,

    /// Emit a per-token trace to stderr and record error call sites
    #[arg(long)]
    pub debug: bool,

    /// Accept vendor option syntaxes and multi-line string constants
    #[arg(long)]
    pub permissive: bool,

    /// Print the per-kind bucketed view instead of the ordered tree
    #[arg(long)]
    pub unordered: bool,
}

/// Parse arguments, run, and exit; the only place that calls `process::exit`.
pub fn run() {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}", err.message);
            process::exit(err.exit_code.0);
        }
    }
}

/// Read, parse, and print one schema file.
pub fn execute(cli: &Cli) -> CliResult<()> {
    let source = fs::read_to_string(&cli.proto)
        .map_err(|err| CliError::failure(format!("failed to read {}: {}", cli.proto.display(), err)))?;

    let options = ParseOptions {
        debug: cli.debug,
        permissive: cli.permissive,
        filename: cli.proto.display().to_string(),
        body_including_comments: false,
    };
    let proto = protosyn_syntax::parse(&source, &options)
        .map_err(|err| CliError::failure(err.to_string()))?;
    tracing::debug!(
        statements = proto.body.len(),
        file = %cli.proto.display(),
        "parsed schema"
    );

    let json = if cli.unordered {
        serde_json::to_string_pretty(&interpret_unordered(&proto))
    } else {
        serde_json::to_string_pretty(&proto)
    }
    .map_err(|err| CliError::failure(format!("failed to serialize tree: {}", err)))?;

    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        let cli = Cli::parse_from(["protosyn", "--proto", "a.proto", "--permissive", "--unordered"]);
        assert_eq!(cli.proto, PathBuf::from("a.proto"));
        assert!(cli.permissive);
        assert!(cli.unordered);
        assert!(!cli.debug);
    }

    #[test]
    fn test_missing_file_is_failure() {
        let cli = Cli::parse_from(["protosyn", "--proto", "/nonexistent/x.proto"]);
        match execute(&cli) {
            Err(err) => {
                assert_eq!(err.exit_code, ExitCode::FAILURE);
                assert!(err.message.contains("failed to read"));
            }
            Ok(()) => panic!("expected a read failure"),
        }
    }
}
