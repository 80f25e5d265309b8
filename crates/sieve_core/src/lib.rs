//! Pure prime sieving engine shared by the `sieve` CLI and its tests.
//!
//! This crate is intentionally small and dependency-light. It finds every prime in `[1, N]` with the Sieve of
//! Eratosthenes and nothing else:
//! - `engine`: the serial sieve and the marking table it runs on,
//! - `parallel`: an opt-in segmented sieve that spreads the marking pass over a rayon pool,
//! - `reference`: trial-division primality used to cross-check results.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state. Prompting, timing and printing belong to the
//!   caller.
//! - Bounds are taken as `i64` so callers can pass user input straight through. Anything below 2 is a degenerate
//!   range and yields an empty result rather than an error.
//! - Running out of memory for the marking table is reported as [`SieveError::ResourceExhausted`]; the search
//!   range is never silently truncated.

pub mod engine;
pub mod errors;
pub mod parallel;
pub mod reference;

pub use engine::{count_primes, ensure_within, sieve};
pub use errors::SieveError;
pub use parallel::{ParallelConfig, parallel_count_primes, parallel_sieve};
pub use reference::{is_prime, trial_division_primes};
