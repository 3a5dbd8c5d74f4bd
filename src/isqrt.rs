// Copyright 2026 Martin Pool

//! Integer square root, exact over all of `u64`.

/// Return the largest `r` such that `r * r <= n`.
///
/// The first guess comes from `f64::sqrt`, which can land one off in either
/// direction: `f64` only has 53 bits of mantissa, so large `n` are rounded
/// before the root is taken, and the root of a perfect square may come back
/// as `6.999...`. The guess is then nudged down and up with checked
/// multiplication until it is exact.
pub fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    debug_assert!(root * root <= n);
    root
}
