//! Trial-division primality, kept as an independent cross-check for the sieves.
//!
//! This is deliberately unrelated to the marking-table code so a bug in one cannot hide a bug in the other.

/// Return `true` if `k` is prime.
///
/// Checks divisibility by 2 and 3, then by every `6i ± 1` up to `sqrt(k)`.
pub fn is_prime(k: u64) -> bool {
    if k <= 1 {
        return false;
    }
    if k <= 3 {
        return true;
    }
    if k % 2 == 0 || k % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= k / i {
        if k % i == 0 || k % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Every prime in `[1, n]` found by trial division. `O(n sqrt(n))`; for verification only.
pub fn trial_division_primes(n: i64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    (2..=n as u64).filter(|&k| is_prime(k)).collect()
}
