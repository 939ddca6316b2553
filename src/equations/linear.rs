//! Linear equations `a·x + b = 0`.

use super::compare::{approx_equal, DEFAULT_TOLERANCE};
use super::roots::Roots;


/// Solves `a·x + b = 0` with [`DEFAULT_TOLERANCE`].
///
/// # Returns
///
/// ┌ [`Roots::Infinite`] - `a ≈ 0` and `b ≈ 0`, every x satisfies `0 = 0`
/// ├ [`Roots::Zero`]     - `a ≈ 0` and `b` is not, `b = 0` has no solution
/// └ [`Roots::One`]      - otherwise, `x = -b / a`
///
/// # Panics
/// └ In debug builds, if `a` or `b` is NaN or inf.
pub fn solve_linear(a: f64, b: f64) -> Roots {
    solve_linear_with(a, b, DEFAULT_TOLERANCE)
}


/// Same as [`solve_linear`], with an explicit zero tolerance.
pub fn solve_linear_with(a: f64, b: f64, tolerance: f64) -> Roots {
    debug_assert!(a.is_finite() && b.is_finite(), "non-finite coefficients: a={a}, b={b}");

    if approx_equal(a, 0.0, tolerance) {
        if approx_equal(b, 0.0, tolerance) {
            return Roots::Infinite;
        }
        return Roots::Zero;
    }

    Roots::One(-b / a)
}
