//! Prime sizing helpers for the probing hash table.
//!
//! Capacities are kept prime to reduce clustering under quadratic probing.
//! These helpers run only when a table is constructed or rehashed, never on
//! the lookup path.

/// Trial-division primality check (odd divisors up to √n).
pub(crate) const fn is_prime(candidate: usize) -> bool {
    if candidate == 2 || candidate == 3 {
        return true;
    }
    if candidate < 2 || candidate % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `minimum`.
pub(crate) const fn next_prime_at_least(minimum: usize) -> usize {
    if minimum <= 2 {
        return 2;
    }
    // Start from an odd candidate and step by 2.
    let mut candidate = if minimum % 2 == 0 { minimum + 1 } else { minimum };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

// =============================================================================
// Tests
// =============================================================================
