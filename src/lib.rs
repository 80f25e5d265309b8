#![forbid(unsafe_code)]
//! Sieve of Eratosthenes prime finder
//!
//! This crate is the caller side of the `sieve_core` engine: it reads an upper limit (from the command line or
//! an interactive prompt), times the engine call, and prints a summary of the primes found.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod report;
pub mod shell;
pub mod version;

pub use config::{RunConfig, Strategy};
pub use report::{Report, display_slice, timed};
pub use shell::{PromptError, prompt_for_bound};
pub use sieve_core::{ParallelConfig, SieveError};
