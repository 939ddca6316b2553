//! tests for the checked `solve` entry point
use approx::assert_abs_diff_eq;
use eqsolve::equations::{
    solve, Coefficients, EquationKind, Roots, SolverCfg, SolverError, ToleranceError,
};

type TestResult = Result<(), SolverError>;

#[test]
fn reports_quadratic_branch() -> TestResult {
    let sol = solve((1.0, 3.0, -4.0), SolverCfg::new())?;

    assert_eq!(sol.kind, EquationKind::Quadratic);
    assert_eq!(sol.roots, Roots::Two(1.0, -4.0));
    assert_eq!(sol.discriminant, Some(25.0));
    Ok(())
}

#[test]
fn reports_linear_branch() -> TestResult {
    let sol = solve(Coefficients::new(0.0, 2.0, -2.0), SolverCfg::new())?;

    assert_eq!(sol.kind, EquationKind::Linear);
    assert_eq!(sol.kind.degree(), 1);
    assert_eq!(sol.roots, Roots::One(1.0));
    assert_eq!(sol.discriminant, None);
    Ok(())
}

#[test]
fn reports_degenerate_branch() -> TestResult {
    let identity = solve((0.0, 0.0, 0.0), SolverCfg::new())?;
    let contradiction = solve((0.0, 0.0, 30.0), SolverCfg::new())?;

    assert_eq!(identity.kind, EquationKind::Degenerate);
    assert_eq!(identity.roots, Roots::Infinite);
    assert_eq!(contradiction.kind, EquationKind::Degenerate);
    assert_eq!(contradiction.roots, Roots::Zero);
    assert_eq!(contradiction.kind.to_string(), "degenerate");
    Ok(())
}

#[test]
fn loose_tolerance_changes_branch() -> TestResult {
    let cfg = SolverCfg::new().with_tolerance(1e-3);
    let sol = solve((1e-4, 2.0, -2.0), cfg)?;

    assert_eq!(sol.kind, EquationKind::Linear);
    assert_eq!(sol.roots, Roots::One(1.0));
    Ok(())
}

#[test]
fn roots_satisfy_equation() -> TestResult {
    let coefficients = Coefficients::new(2.0, -3.0, -5.0);
    let sol = solve(coefficients, SolverCfg::new())?;

    for x in sol.roots.as_vec() {
        assert_abs_diff_eq!(coefficients.evaluate(x), 0.0, epsilon = 1e-9);
    }
    assert_eq!(sol.roots.as_vec().len(), 2);
    Ok(())
}

#[test]
fn rejects_non_finite_coefficient() {
    let err = solve((1.0, f64::NAN, 0.0), SolverCfg::new()).unwrap_err();
    assert!(matches!(err, SolverError::NonFiniteCoefficient { name: "b", value } if value.is_nan()));

    let err = solve((0.0, 1.0, f64::NEG_INFINITY), SolverCfg::new()).unwrap_err();
    assert!(matches!(err, SolverError::NonFiniteCoefficient { name: "c", .. }));
}

#[test]
fn rejects_invalid_tolerance() {
    for bad in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
        let err = solve((1.0, 2.0, 1.0), SolverCfg::new().with_tolerance(bad)).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Tolerance(ToleranceError::InvalidTolerance { .. })
        ));
    }
}

#[test]
fn default_config() {
    let cfg = SolverCfg::default();
    assert_eq!(cfg.tolerance(), 1e-9);
    assert_eq!(cfg.validate(), Ok(cfg));
}
