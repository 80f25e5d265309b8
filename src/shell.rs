//! Interactive prompt for the upper limit
//!
//! Reads lines until one parses as an integer. The loop is bounded so a script piping garbage into the tool
//! cannot spin forever.

use std::io::{self, BufRead, Write};

use thiserror::Error;

pub const PROMPT: &str = "Enter an upper limit of primes to search for (i.e. find all primes in [1, limit]):";
pub const INVALID_NUMBER: &str = "Invalid number!";

/// Errors that end the prompt loop without a bound
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("no valid upper limit after {0} attempts")]
    TooManyAttempts(usize),

    #[error("input ended before an upper limit was entered")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parse one line of user input as an upper limit.
///
/// Surrounding whitespace is ignored. Anything that is not an integer (including `12.5` and `1e6`) is rejected.
pub fn parse_bound(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Prompt on `output` and read from `input` until a valid upper limit is entered.
///
/// Each unparsable line prints [`INVALID_NUMBER`] and prompts again, up to `max_attempts` lines in total.
pub fn prompt_for_bound<R, W>(input: &mut R, output: &mut W, max_attempts: usize) -> Result<i64, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    for attempt in 1..=max_attempts {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        if let Some(bound) = parse_bound(&line) {
            return Ok(bound);
        }

        tracing::debug!(attempt, input = line.trim(), "rejected upper limit");
        writeln!(output, "{INVALID_NUMBER}")?;
    }

    Err(PromptError::TooManyAttempts(max_attempts))
}
