//! Integer sequence generators.

use bufkit_core::SequenceError;

/// The `n`-th Fibonacci number, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// Linear iteration keeping only the last two terms. Terms past
/// `fibonacci(46)` do not fit in an `i32` and wrap.
///
/// # Errors
///
/// [`SequenceError::NegativeIndex`] for `n < 0`.
pub fn fibonacci(n: i32) -> Result<i32, SequenceError> {
    if n < 0 {
        return Err(SequenceError::NegativeIndex { n });
    }
    if n <= 1 {
        return Ok(n);
    }
    let (mut f0, mut f1) = (0i32, 1i32);
    for _ in 2..=n {
        let f2 = f0.wrapping_add(f1);
        f0 = f1;
        f1 = f2;
    }
    Ok(f1)
}
