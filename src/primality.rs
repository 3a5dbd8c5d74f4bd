// Copyright 2026 Martin Pool

//! Trial-division primality test.

use tracing::trace;

use crate::isqrt::isqrt;
use crate::verdict::Verdict;

/// Decide whether `n` is prime, and why.
///
/// Odd candidate divisors are tried in ascending order from 3 up to and
/// including `isqrt(n)`; the first one that divides `n` is reported.
pub fn classify(n: u64) -> Verdict {
    if n < 2 {
        return Verdict::BelowTwo;
    }
    if n == 2 {
        return Verdict::Two;
    }
    if n % 2 == 0 {
        return Verdict::Even;
    }
    let limit = isqrt(n);
    let verdict = (3..=limit)
        .step_by(2)
        .find(|i| n % i == 0)
        .map_or(Verdict::Prime, |divisor| Verdict::Composite { divisor });
    trace!(n, limit, %verdict, "trial division");
    verdict
}

/// Integer types that can be tested for primality.
///
/// Negative values are never prime.
pub trait Primality: Copy {
    fn verdict(self) -> Verdict;

    fn is_prime(self) -> bool {
        self.verdict().is_prime()
    }
}

macro_rules! impl_primality_unsigned {
    ($($t:ty),*) => {$(
        impl Primality for $t {
            fn verdict(self) -> Verdict {
                classify(u64::from(self))
            }
        }
    )*};
}

macro_rules! impl_primality_signed {
    ($($t:ty),*) => {$(
        impl Primality for $t {
            fn verdict(self) -> Verdict {
                // Every non-negative value fits, so failure means negative.
                match u64::try_from(self) {
                    Ok(n) => classify(n),
                    Err(_) => Verdict::BelowTwo,
                }
            }
        }
    )*};
}

impl_primality_unsigned!(u8, u16, u32, u64);
impl_primality_signed!(i8, i16, i32, i64, isize);

impl Primality for usize {
    fn verdict(self) -> Verdict {
        // usize is at most 64 bits on every supported target.
        classify(self as u64)
    }
}

/// True if `n` is prime.
///
/// An unsuffixed integer literal is taken as `i32`.
pub fn is_prime<N: Primality>(n: N) -> bool {
    n.is_prime()
}
