//! Integer sequences: Fibonacci terms and factorials.
//!
//! Both are computed iteratively over arbitrary-precision integers, so any
//! non-negative `n` has an exact result. Time and memory grow with `n`.

use num_bigint::BigUint;

use super::ComputeError;

/// The `n`th Fibonacci number, 0-indexed (`F(0) = 0`, `F(1) = 1`).
///
/// Runs in O(n) additions and keeps only the last two terms.
pub fn fibonacci(n: i64) -> Result<BigUint, ComputeError> {
    if n < 0 {
        return Err(ComputeError::Negative(n));
    }

    let (mut a, mut b) = (BigUint::from(0u32), BigUint::from(1u32));
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    Ok(a)
}

/// `n!`, with `0! = 1`.
pub fn factorial(n: i64) -> Result<BigUint, ComputeError> {
    if n < 0 {
        return Err(ComputeError::Negative(n));
    }

    Ok((1..=n.unsigned_abs()).fold(BigUint::from(1u32), |acc, k| acc * k))
}
