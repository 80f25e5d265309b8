#![no_main]

use libfuzzer_sys::fuzz_target;
use sieve::shell::parse_bound;
use sieve_core::{ParallelConfig, parallel_sieve, sieve, trial_division_primes};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the prompt parser
        if let Some(bound) = parse_bound(s) {
            // Keep the engines cheap enough to cross-check by trial division
            let bound = bound.clamp(-16, 20_000);
            let primes = sieve(bound).expect("small bounds always allocate");
            assert_eq!(primes, trial_division_primes(bound));

            let config = ParallelConfig::new().with_threads(2).with_chunk_size(257);
            assert_eq!(parallel_sieve(bound, &config).expect("small bounds always allocate"), primes);
        }
    }
});
