// Copyright 2026 Martin Pool

//! The reason a number was judged prime or not.

use std::fmt;

use serde::Serialize;

/// Which step of the trial-division test decided the answer.
///
/// Each variant corresponds to one exit from [crate::classify], so a test
/// suite that produces every variant has reached every branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Less than 2, including zero and all negative numbers.
    BelowTwo,
    /// Exactly 2, the only even prime.
    Two,
    /// An even number greater than 2.
    Even,
    /// An odd number with an odd divisor no greater than its square root.
    Composite {
        /// The smallest such divisor.
        divisor: u64,
    },
    /// An odd number with no divisor up to its square root.
    Prime,
}

impl Verdict {
    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::Two | Verdict::Prime)
    }

    /// The smallest nontrivial divisor, if one was found.
    pub fn divisor(&self) -> Option<u64> {
        match self {
            Verdict::Even => Some(2),
            Verdict::Composite { divisor } => Some(*divisor),
            Verdict::BelowTwo | Verdict::Two | Verdict::Prime => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::BelowTwo => write!(f, "not prime, less than 2"),
            Verdict::Two => write!(f, "prime, the only even prime"),
            Verdict::Even => write!(f, "not prime, even"),
            Verdict::Composite { divisor } => write!(f, "composite, divisible by {divisor}"),
            Verdict::Prime => write!(f, "prime"),
        }
    }
}
