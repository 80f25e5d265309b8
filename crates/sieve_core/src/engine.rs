//! Serial Sieve of Eratosthenes.
//!
//! ## Algorithm
//!
//! 1. Allocate a marking table for `0..=n` with 0 and 1 pre-marked.
//! 2. For every `p` in `2..=isqrt(n)` that is still unmarked, mark `p*p, p*p + p, ...` up to `n`. Smaller
//!    multiples of `p` were already struck by a smaller prime factor.
//! 3. Every index left unmarked is prime; read them back in ascending order.
//!
//! Time is `O(n log log n)`, space is one `bool` per candidate.

use crate::errors::SieveError;

/// A contiguous block of candidates `low..=high`, one flag per candidate.
///
/// `true` means the candidate has been struck out as composite (or excluded, for 0 and 1).
pub(crate) struct MarkingTable {
    low: u64,
    marks: Vec<bool>,
}

impl MarkingTable {
    /// Allocate an all-unmarked table covering `low..=high`.
    ///
    /// Allocation is fallible: a range that does not fit in memory (or in `usize`) is reported instead of
    /// aborting the process.
    pub(crate) fn with_range(low: u64, high: u64) -> Result<Self, SieveError> {
        debug_assert!(low <= high);
        let entries = high - low + 1;
        let exhausted = || SieveError::ResourceExhausted {
            bound: high,
            bytes: u128::from(entries) * std::mem::size_of::<bool>() as u128,
        };

        let len = usize::try_from(entries).map_err(|_| exhausted())?;
        let mut marks = Vec::new();
        marks.try_reserve_exact(len).map_err(|_| exhausted())?;
        marks.resize(len, false);

        Ok(Self { low, marks })
    }

    pub(crate) fn mark(&mut self, value: u64) {
        self.marks[(value - self.low) as usize] = true;
    }

    pub(crate) fn is_marked(&self, value: u64) -> bool {
        self.marks[(value - self.low) as usize]
    }

    /// Mark `start, start + step, start + 2*step, ...` up to the end of the table.
    pub(crate) fn strike_multiples(&mut self, step: u64, start: u64) {
        debug_assert!(start >= self.low);
        let step = step as usize;
        let mut index = (start - self.low) as usize;
        while index < self.marks.len() {
            self.marks[index] = true;
            index += step;
        }
    }

    /// Unmarked candidates in ascending order.
    pub(crate) fn unmarked(&self) -> impl Iterator<Item = u64> + '_ {
        let low = self.low;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, marked)| !**marked)
            .map(move |(offset, _)| low + offset as u64)
    }

    pub(crate) fn unmarked_count(&self) -> usize {
        self.marks.iter().filter(|marked| !**marked).count()
    }

    pub(crate) fn high(&self) -> u64 {
        self.low + self.marks.len() as u64 - 1
    }

    /// Copy the unmarked candidates into a freshly allocated vector, reporting allocation failure.
    pub(crate) fn collect_unmarked(&self) -> Result<Vec<u64>, SieveError> {
        let count = self.unmarked_count();
        let mut primes = Vec::new();
        primes.try_reserve_exact(count).map_err(|_| SieveError::ResourceExhausted {
            bound: self.high(),
            bytes: count as u128 * std::mem::size_of::<u64>() as u128,
        })?;
        primes.extend(self.unmarked());
        Ok(primes)
    }
}

/// Convert a caller-supplied bound into the highest candidate to sieve.
///
/// Returns `None` for degenerate ranges (`n < 2`), which contain no primes.
pub(crate) fn upper_candidate(n: i64) -> Option<u64> {
    if n < 2 { None } else { Some(n as u64) }
}

/// Run the sieve pass over `0..=n` and return the finished table.
pub(crate) fn sieve_table(n: u64) -> Result<MarkingTable, SieveError> {
    let mut table = MarkingTable::with_range(0, n)?;
    table.mark(0);
    if n >= 1 {
        table.mark(1);
    }

    for p in 2..=n.isqrt() {
        if !table.is_marked(p) {
            table.strike_multiples(p, p * p);
        }
    }

    Ok(table)
}

/// Find every prime in `[1, n]`, in ascending order.
///
/// Bounds below 2 (negative ones included) yield an empty vector.
///
/// ## Errors
///
/// Returns [`SieveError::ResourceExhausted`] if the marking table or the result cannot be allocated.
///
/// ## Examples
///
/// ```
/// assert_eq!(sieve_core::sieve(30).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sieve_core::sieve(-5).unwrap().is_empty());
/// ```
#[tracing::instrument(skip_all, fields(bound = n))]
pub fn sieve(n: i64) -> Result<Vec<u64>, SieveError> {
    let Some(n) = upper_candidate(n) else {
        return Ok(Vec::new());
    };

    let primes = sieve_table(n)?.collect_unmarked()?;
    tracing::debug!(count = primes.len(), "sieve finished");
    Ok(primes)
}

/// Count the primes in `[1, n]` without materializing them.
#[tracing::instrument(skip_all, fields(bound = n))]
pub fn count_primes(n: i64) -> Result<usize, SieveError> {
    match upper_candidate(n) {
        Some(n) => Ok(sieve_table(n)?.unmarked_count()),
        None => Ok(0),
    }
}

/// Reject bounds above an optional caller-configured ceiling before anything is allocated.
pub fn ensure_within(n: i64, max: Option<u64>) -> Result<(), SieveError> {
    match max {
        Some(max) if n > 0 && n as u64 > max => Err(SieveError::BoundTooLarge { bound: n, max }),
        _ => Ok(()),
    }
}
