//! Segmented sieve that spreads the marking pass over a rayon thread pool.
//!
//! ## Purpose
//!
//! For very large bounds the single marking table of the serial sieve becomes both the memory peak and the
//! bottleneck. This module splits the range into contiguous segments that are sieved independently.
//!
//! ## Design notes
//!
//! * **Base primes first**: every composite `<= n` has a prime factor `<= isqrt(n)`, so the base primes are found
//!   serially with the engine before any segment starts.
//! * **Independent segments**: each segment owns its marking table and strikes multiples of every base prime,
//!   starting at `max(p*p, first multiple of p in the segment)`. No state is shared between workers.
//! * **Ordered output**: segment results are concatenated in segment order, so the output is identical to
//!   [`crate::sieve`].
//!
//! ## Non-goals
//!
//! * No cancellation: once started, every segment runs to completion.

use rayon::prelude::*;

use crate::engine::{MarkingTable, sieve_table, upper_candidate};
use crate::errors::SieveError;

/// Default number of worker threads.
pub const DEFAULT_THREADS: usize = 16;

/// Default number of candidates handed to a worker at a time.
pub const DEFAULT_CHUNK_SIZE: usize = 40_000_000;

/// Worker and segment sizing for [`parallel_sieve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads; `0` lets rayon pick (one per logical CPU).
    pub threads: usize,
    /// Candidates per segment; must be positive.
    pub chunk_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ParallelConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the segment size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Reject sizings the segmented sieve cannot run with
    pub fn validate(&self) -> Result<(), SieveError> {
        if self.chunk_size == 0 {
            return Err(SieveError::InvalidConfig("chunk size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Per-segment result, kept in segment order until concatenation.
type SegmentSlot = Result<Vec<u64>, SieveError>;

/// The segments covering `isqrt(n) + 1 ..= n`, addressed by index so the list is never materialized.
struct SegmentPlan {
    low: u64,
    high: u64,
    chunk: u64,
    count: usize,
}

impl SegmentPlan {
    fn new(n: u64, chunk_size: usize) -> Result<Self, SieveError> {
        let low = n.isqrt() + 1;
        let chunk = chunk_size as u64;
        let segments = (n - low + 1).div_ceil(chunk);
        let count = usize::try_from(segments).map_err(|_| SieveError::ResourceExhausted {
            bound: n,
            bytes: u128::from(segments) * std::mem::size_of::<SegmentSlot>() as u128,
        })?;
        Ok(Self {
            low,
            high: n,
            chunk,
            count,
        })
    }

    /// Inclusive bounds of segment `index`.
    fn bounds(&self, index: usize) -> (u64, u64) {
        let start = self.low + index as u64 * self.chunk;
        (start, start.saturating_add(self.chunk - 1).min(self.high))
    }

    /// Base primes needed to sieve every segment.
    fn base_primes(&self) -> Result<Vec<u64>, SieveError> {
        sieve_table(self.low - 1)?.collect_unmarked()
    }
}

fn build_pool(config: &ParallelConfig) -> Result<rayon::ThreadPool, SieveError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| SieveError::ThreadPool(e.to_string()))
}

/// Sieve one segment against the base primes.
fn segment_table(low: u64, high: u64, base_primes: &[u64]) -> Result<MarkingTable, SieveError> {
    let mut table = MarkingTable::with_range(low, high)?;
    for &p in base_primes {
        let square = p * p;
        if square > high {
            break;
        }
        let first_multiple = low.div_ceil(p) * p;
        table.strike_multiples(p, square.max(first_multiple));
    }
    Ok(table)
}

/// Find every prime in `[1, n]` using a segmented sieve on `config.threads` workers.
///
/// The result is identical to [`crate::sieve`]; only the memory profile and wall-clock time differ.
///
/// ## Errors
///
/// - [`SieveError::InvalidConfig`] if `config.chunk_size` is zero.
/// - [`SieveError::ThreadPool`] if the worker pool cannot be started.
/// - [`SieveError::ResourceExhausted`] if the per-segment result slots, a segment table or the result cannot be
///   allocated.
#[tracing::instrument(skip_all, fields(bound = n, threads = config.threads, chunk_size = config.chunk_size))]
pub fn parallel_sieve(n: i64, config: &ParallelConfig) -> Result<Vec<u64>, SieveError> {
    config.validate()?;
    let Some(n) = upper_candidate(n) else {
        return Ok(Vec::new());
    };

    let plan = SegmentPlan::new(n, config.chunk_size)?;
    let mut slots: Vec<SegmentSlot> = Vec::new();
    slots
        .try_reserve_exact(plan.count)
        .map_err(|_| SieveError::ResourceExhausted {
            bound: n,
            bytes: plan.count as u128 * std::mem::size_of::<SegmentSlot>() as u128,
        })?;

    let base_primes = plan.base_primes()?;
    tracing::debug!(
        base_primes = base_primes.len(),
        segments = plan.count,
        "planned segmented sieve"
    );

    let pool = build_pool(config)?;
    pool.install(|| {
        slots.par_extend((0..plan.count).into_par_iter().map(|index| {
            let (low, high) = plan.bounds(index);
            segment_table(low, high, &base_primes)?.collect_unmarked()
        }))
    });

    let found: usize = slots.iter().map(|slot| slot.as_ref().map_or(0, Vec::len)).sum();
    let total = base_primes.len() + found;
    let mut primes = base_primes;
    primes
        .try_reserve_exact(found)
        .map_err(|_| SieveError::ResourceExhausted {
            bound: n,
            bytes: total as u128 * std::mem::size_of::<u64>() as u128,
        })?;
    for slot in slots {
        primes.extend(slot?);
    }

    tracing::debug!(count = primes.len(), "segmented sieve finished");
    Ok(primes)
}

/// Count the primes in `[1, n]` with the segmented sieve, without materializing them.
#[tracing::instrument(skip_all, fields(bound = n, threads = config.threads, chunk_size = config.chunk_size))]
pub fn parallel_count_primes(n: i64, config: &ParallelConfig) -> Result<usize, SieveError> {
    config.validate()?;
    let Some(n) = upper_candidate(n) else {
        return Ok(0);
    };

    let plan = SegmentPlan::new(n, config.chunk_size)?;
    let base_primes = plan.base_primes()?;
    let pool = build_pool(config)?;
    let found = pool.install(|| {
        (0..plan.count)
            .into_par_iter()
            .map(|index| {
                let (low, high) = plan.bounds(index);
                Ok(segment_table(low, high, &base_primes)?.unmarked_count())
            })
            .try_reduce(|| 0, |a, b| Ok(a + b))
    })?;

    Ok(base_primes.len() + found)
}
