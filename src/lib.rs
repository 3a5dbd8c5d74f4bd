// Copyright 2026 Martin Pool

//! `primality`: decide whether an integer is prime by trial division.
//!
//! ```
//! use primality::{classify, is_prime, Verdict};
//!
//! assert!(is_prime(7919));
//! assert!(!is_prime(-10));
//! assert_eq!(classify(49), Verdict::Composite { divisor: 7 });
//! ```
//!
//! The library emits `trace`-level [tracing] events and never installs a
//! subscriber.

mod isqrt;
mod primality;
mod primes;
mod verdict;

pub use crate::isqrt::isqrt;
pub use crate::primality::{classify, is_prime, Primality};
pub use crate::primes::{primes, Primes};
pub use crate::verdict::Verdict;
