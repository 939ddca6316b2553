//! Approximate equality for floating-point coefficients.
//! - `approx_equal`         : `true` if `|x - y| < tolerance`
//! - `approx_equal_default` : same, with [`DEFAULT_TOLERANCE`]

/// Tolerance used by the plain solvers and by [`SolverCfg::default`].
///
/// [`SolverCfg::default`]: super::config::SolverCfg
pub const DEFAULT_TOLERANCE: f64 = 1e-9;


/// Returns `true` if `x` and `y` differ by strictly less than `tolerance`.
///
/// `tolerance` must be finite and > 0; the result is meaningless otherwise.
#[inline]
pub fn approx_equal(x: f64, y: f64, tolerance: f64) -> bool {
    (x - y).abs() < tolerance
}


/// Returns `true` if `x` and `y` differ by less than [`DEFAULT_TOLERANCE`].
#[inline]
pub fn approx_equal_default(x: f64, y: f64) -> bool {
    approx_equal(x, y, DEFAULT_TOLERANCE)
}
