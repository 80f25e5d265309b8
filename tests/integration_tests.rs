//! End-to-end tests for the sieve CLI
//!
//! These drive `execute_with_io` with in-memory input and output, covering both the command-line limit and the
//! interactive prompt.

use clap::Parser;
use sieve::cli::{Cli, ExitCode, execute_with_io};
use sieve::shell::{INVALID_NUMBER, PROMPT};

/// Helper to run the CLI with the given arguments and stdin contents
fn run_cli(args: &[&str], stdin: &str) -> (Result<ExitCode, String>, String) {
    let mut argv = vec!["sieve"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");

    let mut input = stdin.as_bytes();
    let mut output = Vec::new();
    let result = execute_with_io(cli, &mut input, &mut output).map_err(|e| e.message);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_limit_from_arguments() {
    let (result, out) = run_cli(&["10"], "");
    assert_eq!(result, Ok(ExitCode::SUCCESS));
    assert!(!out.contains(PROMPT));
    assert!(out.contains("4 primes found."));
    assert!(out.ends_with("Primes found: [2, 3, 5, 7]\n"));
}

#[test]
fn test_prompt_until_valid_integer() {
    let (result, out) = run_cli(&[], "twenty\n3.5\n20\n");
    assert_eq!(result, Ok(ExitCode::SUCCESS));
    assert_eq!(out.matches(PROMPT).count(), 3);
    assert_eq!(out.matches(INVALID_NUMBER).count(), 2);
    assert!(out.contains("Finding primes...\n"));
    assert!(out.ends_with("Primes found: [2, 3, 5, 7, 11, 13, 17, 19]\n"));
}

#[test]
fn test_prompt_gives_up() {
    let (result, out) = run_cli(&["--attempts", "2"], "x\ny\n5\n");
    let message = result.unwrap_err();
    assert_eq!(message, "Error: no valid upper limit after 2 attempts");
    assert!(!out.contains("Finding primes..."));
}

#[test]
fn test_prompt_end_of_input() {
    let (result, _) = run_cli(&[], "");
    assert_eq!(result.unwrap_err(), "Error: input ended before an upper limit was entered");
}

#[test]
fn test_negative_limit_is_empty() {
    let (result, out) = run_cli(&[], "-40\n");
    assert!(result.is_ok());
    assert!(out.contains("0 primes found."));
    assert!(out.ends_with("Primes found: []\n"));
}

#[test]
fn test_long_result_shows_last_hundred() {
    let (result, out) = run_cli(&["1000"], "");
    assert!(result.is_ok());
    assert!(out.contains("168 primes found."));

    let last_line = out.lines().last().expect("report has lines");
    assert!(last_line.starts_with("Last 100 primes: ["));
    assert!(last_line.ends_with("983, 991, 997]"));
    let shown = last_line.matches(", ").count() + 1;
    assert_eq!(shown, 100);
}

#[test]
fn test_exactly_max_display_shows_everything() {
    // There are exactly 25 primes below 100.
    let (_, out) = run_cli(&["100", "--max-display", "25"], "");
    assert!(out.contains("Primes found: [2, 3, 5"));
}

#[test]
fn test_parallel_output_matches_serial() {
    let (_, serial) = run_cli(&["5000"], "");
    let (_, parallel) = run_cli(&["5000", "--parallel", "--threads", "3", "--chunk-size", "100"], "");
    assert_eq!(serial.lines().last(), parallel.lines().last());
}

#[test]
fn test_verify_flag() {
    let (result, out) = run_cli(&["2000", "--verify"], "");
    assert!(result.is_ok());
    assert!(out.contains("Verified 303 primes against trial division."));
}

#[test]
fn test_max_bound_rejects_before_sieving() {
    let (result, out) = run_cli(&["1001", "--max-bound", "1000"], "");
    let message = result.unwrap_err();
    assert!(message.starts_with("Error: upper limit 1001 is bigger than the allowed maximum of 1000"));
    assert!(message.contains("help: "));
    assert!(out.is_empty());
}

#[test]
fn test_default_max_bound() {
    let (result, _) = run_cli(&["4250000001"], "");
    assert!(result.unwrap_err().contains("allowed maximum of 4250000000"));
}
