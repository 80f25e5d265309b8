//! Errors reported by the sieve engine.
//!
//! A bound below 2 is not an error (it yields an empty result), and unparsable user input never reaches the
//! engine. What remains are resource and configuration failures.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while sieving.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SieveError {
    /// The marking table (or the result buffer) could not be allocated.
    #[error("not enough memory to sieve up to {bound}: failed to allocate {bytes} bytes")]
    #[diagnostic(
        code(sieve::resource_exhausted),
        help("try a smaller upper limit, or use --parallel so only one segment per worker is resident")
    )]
    ResourceExhausted { bound: u64, bytes: u128 },

    /// The bound exceeds a ceiling configured by the caller.
    #[error("upper limit {bound} is bigger than the allowed maximum of {max}")]
    #[diagnostic(code(sieve::bound_too_large), help("raise the ceiling with --max-bound, or pass --no-max-bound"))]
    BoundTooLarge { bound: i64, max: u64 },

    /// The parallel sizing cannot be used (for example a zero chunk size).
    #[error("invalid sieve configuration: {0}")]
    #[diagnostic(code(sieve::invalid_config))]
    InvalidConfig(String),

    /// The rayon worker pool could not be built.
    #[error("failed to start worker threads: {0}")]
    #[diagnostic(code(sieve::thread_pool))]
    ThreadPool(String),
}
