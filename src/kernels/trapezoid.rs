//! Composite trapezoidal integration.

use crate::{Error, Result};

/// Approximate `∫ₐᵇ f(x) dx` with `n` equal subintervals.
///
/// The sum is accumulated as `0.5 * (f(a) + f(b))` followed by the interior
/// points `f(a + i*h)` for `i = 1..n` in ascending order, then scaled by
/// `h`. Keeping that order fixed makes results bit-for-bit reproducible.
/// `b < a` integrates over the reversed interval and flips the sign.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `n == 0`, when `a` or `b` is
/// not finite, or when the sum itself overflows to NaN or infinity.
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_arguments(a, b, n)?;

    let h = (b - a) / n as f64;
    let mut s = 0.5 * (f(a) + f(b));
    for i in 1..n {
        let x = a + i as f64 * h;
        s += f(x);
    }

    let value = s * h;
    if !value.is_finite() {
        return Err(Error::invalid_argument(
            "a",
            format!("integrand overflows f64 over [{}, {}]", a, b),
        ));
    }
    Ok(value)
}

/// Approximate `∫ₐᵇ x² dx` with the composite trapezoidal rule.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `n == 0`, when `a` or `b` is
/// not finite, or when `x²` overflows `f64` over the interval.
///
/// # Example
///
/// ```rust
/// use num_kernels::trapezoid;
///
/// let area = trapezoid(0.0, 1.0, 1000).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-4);
/// assert!(trapezoid(0.0, 1.0, 0).is_err());
/// ```
pub fn trapezoid(a: f64, b: f64, n: usize) -> Result<f64> {
    let value = integrate(|x| x * x, a, b, n)?;
    tracing::debug!(a, b, subintervals = n, value, "trapezoid complete");
    Ok(value)
}

/// Closed form of `∫ₐᵇ x² dx`, i.e. `(b³ - a³) / 3`.
pub fn exact_square_integral(a: f64, b: f64) -> f64 {
    (b * b * b - a * a * a) / 3.0
}

fn check_arguments(a: f64, b: f64, n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid_argument(
            "n",
            "subinterval count must be at least 1",
        ));
    }
    if !a.is_finite() {
        return Err(Error::invalid_argument(
            "a",
            format!("lower bound must be finite, got {}", a),
        ));
    }
    if !b.is_finite() {
        return Err(Error::invalid_argument(
            "b",
            format!("upper bound must be finite, got {}", b),
        ));
    }
    Ok(())
}
