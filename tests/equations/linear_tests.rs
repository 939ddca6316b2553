//! tests for the linear solver
use eqsolve::equations::{approx_equal, approx_equal_default, solve_linear, solve_linear_with, RootCount, Roots};

#[test]
fn finds_single_root() {
    assert_eq!(solve_linear(2.0, -2.0), Roots::One(1.0));
    assert_eq!(solve_linear(-4.0, 2.0), Roots::One(0.5));
}

#[test]
fn identity_has_infinite_roots() {
    assert_eq!(solve_linear(0.0, 0.0), Roots::Infinite);
    assert_eq!(solve_linear(1e-15, -1e-12).count(), RootCount::Infinite);
}

#[test]
fn contradiction_has_no_roots() {
    assert_eq!(solve_linear(0.0, 30.0), Roots::Zero);
    assert_eq!(solve_linear(1e-12, 1.0), Roots::Zero);
}

#[test]
fn tolerance_decides_zero_slope() {
    // 1e-6 is zero under a loose tolerance, not under the default
    assert_eq!(solve_linear_with(1e-6, 1.0, 1e-3), Roots::Zero);
    assert_eq!(solve_linear(1e-6, 1.0).count(), RootCount::One);
}

#[test]
fn approx_equal_is_strict() {
    assert!(approx_equal(1.0, 1.0 + 1e-10, 1e-9));
    assert!(!approx_equal(0.0, 1e-9, 1e-9));
    assert!(approx_equal_default(0.0, -5e-10));
    assert!(!approx_equal_default(0.0, 2e-9));
}
