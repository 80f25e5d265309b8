//! Run configuration for the sieve CLI
//!
//! Everything here is caller policy (which engine, how much to print, what to refuse); the engine itself takes
//! only a bound.

use sieve_core::ParallelConfig;

/// Default number of primes printed before the output is truncated to the tail.
pub const DEFAULT_MAX_DISPLAY_COUNT: usize = 100;

/// Default ceiling on the upper limit.
pub const DEFAULT_MAX_BOUND: u64 = 4_250_000_000;

/// Default number of prompts before the interactive shell gives up.
pub const DEFAULT_MAX_PROMPT_ATTEMPTS: usize = 5;

/// Which engine runs the sieve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single marking table, single thread
    #[default]
    Serial,
    /// Segmented sieve on a rayon pool
    Parallel,
}

/// Configuration for one sieve run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Print every prime when at most this many were found, otherwise only the last this-many
    pub max_display_count: usize,
    pub strategy: Strategy,
    /// Worker sizing, used when `strategy` is `Parallel`
    pub parallel: ParallelConfig,
    /// Upper limits above this are refused before any allocation (`None` disables the check)
    pub max_bound: Option<u64>,
    /// Failed prompts tolerated by the interactive shell
    pub max_prompt_attempts: usize,
    /// Print only the number of primes found
    pub count_only: bool,
    /// Cross-check the result against trial division
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_display_count: DEFAULT_MAX_DISPLAY_COUNT,
            strategy: Strategy::Serial,
            parallel: ParallelConfig::default(),
            max_bound: Some(DEFAULT_MAX_BOUND),
            max_prompt_attempts: DEFAULT_MAX_PROMPT_ATTEMPTS,
            count_only: false,
            verify: false,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display truncation threshold
    pub fn with_max_display_count(mut self, count: usize) -> Self {
        self.max_display_count = count;
        self
    }

    /// Set the sieve strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set parallel worker sizing
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set (or clear) the upper limit ceiling
    pub fn with_max_bound(mut self, max_bound: Option<u64>) -> Self {
        self.max_bound = max_bound;
        self
    }

    /// Set the number of prompts before giving up
    pub fn with_max_prompt_attempts(mut self, attempts: usize) -> Self {
        self.max_prompt_attempts = attempts;
        self
    }

    /// Print only the number of primes found
    pub fn with_count_only(mut self, count_only: bool) -> Self {
        self.count_only = count_only;
        self
    }

    /// Cross-check the result against trial division
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
