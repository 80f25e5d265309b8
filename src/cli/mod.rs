//! CLI module for the sieve
//!
//! ## Usage
//!
//! - `sieve <LIMIT>` - find all primes in `[1, LIMIT]` and print a summary
//! - `sieve` - prompt for the limit interactively, then do the same
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use miette::Diagnostic;
use sieve_core::SieveError;

use crate::config::{DEFAULT_MAX_DISPLAY_COUNT, DEFAULT_MAX_PROMPT_ATTEMPTS, RunConfig, Strategy};
use crate::shell::{self, PromptError};
use crate::version::SIEVE_VERSION;

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

impl From<SieveError> for CliError {
    fn from(err: SieveError) -> Self {
        let mut message = format!("Error: {}", err);
        if let Some(help) = err.help() {
            message.push_str(&format!("\n  help: {}", help));
        }
        CliError::failure(message)
    }
}

impl From<PromptError> for CliError {
    fn from(err: PromptError) -> Self {
        CliError::failure(format!("Error: {}", err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Find all primes in [1, LIMIT] with the Sieve of Eratosthenes
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version = SIEVE_VERSION)]
#[command(about = "Find all primes in [1, LIMIT] with the Sieve of Eratosthenes", long_about = None)]
pub struct Cli {
    /// Upper limit (prompted for interactively when omitted)
    #[arg(value_name = "LIMIT", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Print every prime when at most N were found, otherwise only the last N
    #[arg(long = "max-display", value_name = "N", default_value_t = DEFAULT_MAX_DISPLAY_COUNT)]
    pub max_display: usize,

    /// Use the segmented parallel sieve
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (0 = one per CPU)
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Candidates per segment for --parallel
    #[arg(long = "chunk-size", value_name = "N", requires = "parallel")]
    pub chunk_size: Option<usize>,

    /// Refuse upper limits above N
    #[arg(long = "max-bound", value_name = "N", conflicts_with = "no_max_bound")]
    pub max_bound: Option<u64>,

    /// Accept any upper limit that fits in memory
    #[arg(long = "no-max-bound")]
    pub no_max_bound: bool,

    /// Print only the number of primes found
    #[arg(long = "count-only")]
    pub count_only: bool,

    /// Cross-check the result against trial division (slow)
    #[arg(long)]
    pub verify: bool,

    /// Invalid entries tolerated by the interactive prompt
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PROMPT_ATTEMPTS)]
    pub attempts: usize,
}

impl Cli {
    /// Build the run configuration from parsed flags.
    pub fn to_config(&self) -> RunConfig {
        let mut config = RunConfig::new()
            .with_max_display_count(self.max_display)
            .with_max_prompt_attempts(self.attempts)
            .with_count_only(self.count_only)
            .with_verify(self.verify);

        if self.parallel {
            let mut parallel = config.parallel.clone();
            if let Some(threads) = self.threads {
                parallel = parallel.with_threads(threads);
            }
            if let Some(chunk_size) = self.chunk_size {
                parallel = parallel.with_chunk_size(chunk_size);
            }
            config = config.with_strategy(Strategy::Parallel).with_parallel(parallel);
        }

        if self.no_max_bound {
            config = config.with_max_bound(None);
        } else if let Some(max_bound) = self.max_bound {
            config = config.with_max_bound(Some(max_bound));
        }

        config
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

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match execute_with_io(cli, &mut input, &mut output) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            let _ = output.flush();
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI over the given input and output streams.
///
/// Prompts on `output` for the upper limit when none was passed on the command line.
pub fn execute_with_io<R, W>(cli: Cli, input: &mut R, output: &mut W) -> CliResult<ExitCode>
where
    R: BufRead,
    W: Write,
{
    let config = cli.to_config();
    tracing::debug!(?config, "resolved run configuration");

    let limit = match cli.limit {
        Some(limit) => limit,
        None => shell::prompt_for_bound(input, output, config.max_prompt_attempts)?,
    };

    commands::find_primes(limit, &config, output)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sieve_core::ParallelConfig;

    #[test]
    fn test_cli_parse_limit() {
        let cli = Cli::try_parse_from(["sieve", "30"]).unwrap();
        assert_eq!(cli.limit, Some(30));
        assert_eq!(cli.max_display, 100);
    }

    #[test]
    fn test_cli_parse_negative_limit() {
        let cli = Cli::try_parse_from(["sieve", "-5"]).unwrap();
        assert_eq!(cli.limit, Some(-5));
    }

    #[test]
    fn test_cli_parse_no_limit() {
        let cli = Cli::try_parse_from(["sieve"]).unwrap();
        assert!(cli.limit.is_none());
    }

    #[test]
    fn test_cli_rejects_non_integer_limit() {
        assert!(Cli::try_parse_from(["sieve", "12.5"]).is_err());
    }

    #[test]
    fn test_cli_parse_parallel_flags() {
        let cli = Cli::try_parse_from(["sieve", "1000", "--parallel", "--threads", "4", "--chunk-size", "128"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.strategy, Strategy::Parallel);
        assert_eq!(config.parallel, ParallelConfig::new().with_threads(4).with_chunk_size(128));
    }

    #[test]
    fn test_cli_threads_requires_parallel() {
        assert!(Cli::try_parse_from(["sieve", "10", "--threads", "4"]).is_err());
    }

    #[test]
    fn test_cli_max_bound_flags() {
        let config = Cli::try_parse_from(["sieve", "10"]).unwrap().to_config();
        assert_eq!(config.max_bound, Some(4_250_000_000));

        let config = Cli::try_parse_from(["sieve", "10", "--max-bound", "50"]).unwrap().to_config();
        assert_eq!(config.max_bound, Some(50));

        let config = Cli::try_parse_from(["sieve", "10", "--no-max-bound"]).unwrap().to_config();
        assert_eq!(config.max_bound, None);

        assert!(Cli::try_parse_from(["sieve", "10", "--max-bound", "50", "--no-max-bound"]).is_err());
    }

    #[test]
    fn test_cli_display_and_mode_flags() {
        let cli = Cli::try_parse_from([
            "sieve",
            "10",
            "--max-display",
            "5",
            "--count-only",
            "--verify",
            "--attempts",
            "2",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.max_display_count, 5);
        assert!(config.count_only);
        assert!(config.verify);
        assert_eq!(config.max_prompt_attempts, 2);
        assert_eq!(config.strategy, Strategy::Serial);
    }

    #[test]
    fn test_sieve_error_conversion_includes_help() {
        let err = CliError::from(SieveError::BoundTooLarge { bound: 11, max: 10 });
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Error: upper limit 11 is bigger than the allowed maximum of 10"));
        assert!(err.message.contains("help: "));
    }
}
