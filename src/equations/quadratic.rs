//! Quadratic equations `a·x² + b·x + c = 0`.

use super::compare::{approx_equal, DEFAULT_TOLERANCE};
use super::linear::solve_linear_with;
use super::roots::Roots;


/// `b² - 4ac`
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}


/// Divides through by `max(|a|, |b|, |c|)` when `b² - 4ac` overflows.
/// The roots are unchanged; callers must have ruled out `a ≈ 0`.
fn rescaled(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    if discriminant(a, b, c).is_finite() {
        return (a, b, c);
    }
    let scale = a.abs().max(b.abs()).max(c.abs());
    (a / scale, b / scale, c / scale)
}


/// Solves `a·x² + b·x + c = 0` with [`DEFAULT_TOLERANCE`].
///
/// # Returns
///
/// ┌ `a ≈ 0`     - delegates to [`solve_linear`](super::linear::solve_linear) with `(b, c)`
/// ├ `D < 0`     - [`Roots::Zero`] (strict comparison, no tolerance)
/// ├ `D ≈ 0`     - [`Roots::One`] with `x = -b / 2a`
/// └ otherwise   - [`Roots::Two`] with `(-b ± √D) / 2a`, larger root first
///
/// where `D` is the [`discriminant`].
///
/// # Notes
/// ├ The negative check runs before the tolerant zero check, so a
/// │ discriminant in `(-tolerance, 0)` still reports no roots.
/// └ If `D` overflows, the coefficients are divided by the largest of
///   `|a|`, `|b|`, `|c|` first. The `a ≈ 0` test always uses the raw `a`.
///
/// # Panics
/// └ In debug builds, if `a`, `b` or `c` is NaN or inf.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    solve_quadratic_with(a, b, c, DEFAULT_TOLERANCE)
}


/// Same as [`solve_quadratic`], with an explicit zero tolerance.
pub fn solve_quadratic_with(a: f64, b: f64, c: f64, tolerance: f64) -> Roots {
    debug_assert!(
        a.is_finite() && b.is_finite() && c.is_finite(),
        "non-finite coefficients: a={a}, b={b}, c={c}"
    );

    if approx_equal(a, 0.0, tolerance) {
        return solve_linear_with(b, c, tolerance);
    }

    let (a, b, c) = rescaled(a, b, c);
    let d = discriminant(a, b, c);
    if d < 0.0 {
        return Roots::Zero;
    }

    if approx_equal(d, 0.0, tolerance) {
        return Roots::One(-b / (2.0 * a));
    }

    let sqrt_d = d.sqrt();
    let x1 = (-b + sqrt_d) / (2.0 * a);
    let x2 = (-b - sqrt_d) / (2.0 * a);

    // a < 0 flips which branch is larger
    if x1 >= x2 { Roots::Two(x1, x2) } else { Roots::Two(x2, x1) }
}
