//! Layering guardrails to keep the engine crate free of caller concerns.
//!
//! `sieve_core` is the pure engine: no argument parsing, no log subscriber, no terminal rendering. This test
//! scans its `Cargo.toml` and fails if any CLI-side crate appears in `[dependencies]`.

const CALLER_ONLY_CRATES: &[&str] = &["clap", "tracing-subscriber", "insta", "sieve "];

#[test]
fn engine_does_not_depend_on_cli_crates() {
    let manifest = include_str!("../crates/sieve_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        for krate in CALLER_ONLY_CRATES {
            if line_no_comment.starts_with(krate) {
                panic!("`{}` must not appear in sieve_core's [dependencies]", krate.trim());
            }
        }
    }
}

#[test]
fn engine_does_not_enable_fancy_diagnostics() {
    let manifest = include_str!("../crates/sieve_core/Cargo.toml");
    let miette_line = manifest
        .lines()
        .find(|line| line.trim_start().starts_with("miette"))
        .expect("sieve_core uses miette for diagnostic codes");
    assert!(
        !miette_line.contains("fancy"),
        "terminal rendering belongs to the CLI crate, not sieve_core"
    );
}
