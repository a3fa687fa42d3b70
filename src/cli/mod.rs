//! CLI module for the Micro tools
//!
//! ## Commands
//!
//! - `scan <file> [-o <out>]` - Tokenize a file and write its token labels
//! - `parse <file>` - Check a file for lexical and syntax errors
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `dump` - Token dump writer
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod dump;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_TOKEN_LEN, SyntaxConfig};
use crate::frontend::render::DiagnosticStyle;
use crate::version::MICRO_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);

    /// Success when nothing was reported, failure otherwise.
    pub fn from_errors(has_errors: bool) -> Self {
        if has_errors { Self::FAILURE } else { Self::SUCCESS }
    }
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
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
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

/// Scanner and recognizer for the Micro language
#[derive(Parser, Debug)]
#[command(name = "micro")]
#[command(version = MICRO_VERSION)]
#[command(about = "Scanner and recognizer for the Micro language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Longest identifier or integer literal accepted without a diagnostic
    #[arg(long, global = true, value_name = "CHARS", default_value_t = DEFAULT_MAX_TOKEN_LEN)]
    pub max_token_len: usize,

    /// Deepest nesting of blocks and parentheses the recognizer follows
    #[arg(long = "max-depth", global = true, value_name = "LEVELS", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    pub max_depth: usize,

    /// How diagnostics are printed
    #[arg(long, global = true, value_enum, default_value = "plain")]
    pub diagnostics: DiagnosticStyle,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a file and write one label per token
    Scan {
        /// Source file to scan
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Where to write the token dump (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Check that a file is a syntactically valid program
    Parse {
        /// Source file to check
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    /// Syntax limits selected on the command line.
    pub fn syntax_config(&self) -> SyntaxConfig {
        SyntaxConfig::default()
            .with_max_token_len(self.max_token_len)
            .with_max_nesting_depth(self.max_depth)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = commands::RunOptions {
        config: cli.syntax_config(),
        style: cli.diagnostics,
    };
    tracing::debug!(?options, "executing command");

    match cli.command {
        Command::Scan { input, output } => commands::scan_file(&input, output.as_deref(), &options),
        Command::Parse { input } => commands::parse_file(&input, &options),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::try_parse_from(["micro", "scan", "prog.micro", "-o", "tokens.txt"]).unwrap();
        if let Command::Scan { input, output } = cli.command {
            assert_eq!(input, PathBuf::from("prog.micro"));
            assert_eq!(output, Some(PathBuf::from("tokens.txt")));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_defaults_to_stdout() {
        let cli = Cli::try_parse_from(["micro", "scan", "prog.micro"]).unwrap();
        assert!(matches!(cli.command, Command::Scan { output: None, .. }));
    }

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::try_parse_from(["micro", "parse", "prog.micro"]).unwrap();
        assert!(matches!(cli.command, Command::Parse { .. }));
        assert_eq!(cli.diagnostics, DiagnosticStyle::Plain);
        assert_eq!(cli.syntax_config(), SyntaxConfig::default());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "micro",
            "parse",
            "prog.micro",
            "--max-token-len",
            "8",
            "--max-depth",
            "3",
            "--diagnostics",
            "fancy",
        ])
        .unwrap();
        assert_eq!(cli.diagnostics, DiagnosticStyle::Fancy);
        let config = cli.syntax_config();
        assert_eq!(config.max_token_len, 8);
        assert_eq!(config.max_nesting_depth, 3);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["micro", "3", "prog.micro"]).is_err());
        assert!(Cli::try_parse_from(["micro"]).is_err());
    }

    #[test]
    fn test_exit_code_from_errors() {
        assert_eq!(ExitCode::from_errors(false), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from_errors(true), ExitCode::FAILURE);
    }
}
