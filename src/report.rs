//! Timing and result presentation
//!
//! The engine returns bare primes; this module measures the call and decides how much of the result to show.

use std::fmt;
use std::time::{Duration, Instant};

/// Run `f` and measure its wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// The primes to print: all of them when at most `max_display_count` were found, otherwise the last
/// `max_display_count` in ascending order.
pub fn display_slice(primes: &[u64], max_display_count: usize) -> &[u64] {
    if primes.len() > max_display_count {
        &primes[primes.len() - max_display_count..]
    } else {
        primes
    }
}

/// Summary of one sieve run, rendered with `Display`.
#[derive(Debug, Clone)]
pub struct Report {
    pub primes: Vec<u64>,
    pub elapsed: Duration,
    pub max_display_count: usize,
}

impl Report {
    pub fn new(primes: Vec<u64>, elapsed: Duration, max_display_count: usize) -> Self {
        Self {
            primes,
            elapsed,
            max_display_count,
        }
    }

    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.primes.len() > self.max_display_count
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Took {:.6}s to find primes. {} primes found.",
            self.elapsed.as_secs_f64(),
            self.count()
        )?;
        let shown = display_slice(&self.primes, self.max_display_count);
        if self.is_truncated() {
            write!(f, "Last {} primes: {:?}", self.max_display_count, shown)
        } else {
            write!(f, "Primes found: {:?}", shown)
        }
    }
}
