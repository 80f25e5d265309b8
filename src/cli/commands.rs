//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::Write;

use sieve_core::{count_primes, ensure_within, parallel_count_primes, parallel_sieve, sieve, trial_division_primes};

use super::{CliError, CliResult, ExitCode};
use crate::config::{RunConfig, Strategy};
use crate::report::{Report, timed};

/// Above this limit `--verify` is slow enough to deserve a warning.
const VERIFY_WARN_LIMIT: i64 = 10_000_000;

fn write_error(e: std::io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {}", e))
}

/// Find all primes in `[1, limit]` and print the report to `out`.
///
/// ## Errors
///
/// Returns an error if:
/// - `limit` exceeds the configured ceiling
/// - the engine cannot allocate its marking table
/// - `--verify` finds a mismatch against trial division
pub fn find_primes<W: Write>(limit: i64, config: &RunConfig, out: &mut W) -> CliResult<ExitCode> {
    ensure_within(limit, config.max_bound)?;

    writeln!(out, "Finding primes...").map_err(write_error)?;

    if config.count_only && !config.verify {
        let (count, elapsed) = timed(|| match config.strategy {
            Strategy::Serial => count_primes(limit),
            Strategy::Parallel => parallel_count_primes(limit, &config.parallel),
        });
        let count = count?;
        writeln!(
            out,
            "Took {:.6}s to count primes. {} primes found.",
            elapsed.as_secs_f64(),
            count
        )
        .map_err(write_error)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (primes, elapsed) = timed(|| match config.strategy {
        Strategy::Serial => sieve(limit),
        Strategy::Parallel => parallel_sieve(limit, &config.parallel),
    });
    let primes = primes?;
    tracing::debug!(
        limit,
        count = primes.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        strategy = ?config.strategy,
        "sieve complete"
    );

    if config.verify {
        verify(limit, &primes)?;
        writeln!(out, "Verified {} primes against trial division.", primes.len()).map_err(write_error)?;
    }

    if config.count_only {
        writeln!(
            out,
            "Took {:.6}s to find primes. {} primes found.",
            elapsed.as_secs_f64(),
            primes.len()
        )
        .map_err(write_error)?;
    } else {
        let report = Report::new(primes, elapsed, config.max_display_count);
        writeln!(out, "{}", report).map_err(write_error)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Compare sieve output against trial division and describe the first difference.
fn verify(limit: i64, primes: &[u64]) -> CliResult<()> {
    if limit > VERIFY_WARN_LIMIT {
        tracing::warn!(limit, "verifying by trial division; this may take a long time");
    }

    let expected = trial_division_primes(limit);
    if expected == primes {
        return Ok(());
    }

    let position = expected.iter().zip(primes).position(|(a, b)| a != b);
    let detail = match position {
        Some(i) => format!("first difference at index {}: expected {}, got {}", i, expected[i], primes[i]),
        None => format!("expected {} primes, got {}", expected.len(), primes.len()),
    };
    Err(CliError::failure(format!("Verification failed: {}", detail)))
}
