// Copyright 2026 Martin Pool

//! Enumerate primes in ascending order.

use std::iter::FusedIterator;

use crate::primality::classify;

/// Iterate all primes, starting from 2.
pub fn primes() -> Primes {
    Primes::starting_at(0)
}

/// An iterator over primes in ascending order.
///
/// Stops after the largest prime that fits in a `u64`.
#[derive(Debug, Clone)]
pub struct Primes {
    /// The next candidate to test, or None once every `u64` has been tried.
    next: Option<u64>,
}

impl Primes {
    /// Iterate primes greater than or equal to `start`.
    pub fn starting_at(start: u64) -> Primes {
        Primes { next: Some(start) }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while let Some(candidate) = self.next {
            self.next = candidate.checked_add(1);
            if classify(candidate).is_prime() {
                return Some(candidate);
            }
        }
        None
    }
}

impl FusedIterator for Primes {}
