//! Checked solving entry point.
//!
//! Provides [`Coefficients`], the [`EquationKind`] enum naming which branch
//! a set of coefficients falls into, and the [`Solution`] report returned by
//! [`solve`].

use tracing::debug;

use super::compare::approx_equal;
use super::config::SolverCfg;
use super::errors::SolverError;
use super::linear::solve_linear_with;
use super::quadratic::{discriminant, solve_quadratic_with};
use super::roots::Roots;


/// Coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}
impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `a·x² + b·x + c`
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    fn check_finite(&self) -> Result<(), SolverError> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() {
                return Err(SolverError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }
}
impl From<(f64, f64, f64)> for Coefficients {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}


/// Which branch the solver took.
/// - [`EquationKind::Quadratic`]  : `a` is not ≈ 0
/// - [`EquationKind::Linear`]     : `a ≈ 0`, `b` is not ≈ 0
/// - [`EquationKind::Degenerate`] : `a ≈ 0` and `b ≈ 0`, so `c = 0` is an
///   identity or a contradiction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EquationKind {
    Quadratic,
    Linear,
    Degenerate,
}
impl EquationKind {
    pub const fn name(self) -> &'static str {
        match self {
            EquationKind::Quadratic  => "quadratic",
            EquationKind::Linear     => "linear",
            EquationKind::Degenerate => "degenerate",
        }
    }

    pub const fn degree(self) -> usize {
        match self {
            EquationKind::Quadratic  => 2,
            EquationKind::Linear     => 1,
            EquationKind::Degenerate => 0,
        }
    }
}
impl std::fmt::Display for EquationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Report returned by [`solve`].
///
/// [`Solution`]
/// - `kind`         : branch taken ([`EquationKind`])
/// - `roots`        : the real roots ([`Roots`])
/// - `discriminant` : `b² - 4ac`, only for [`EquationKind::Quadratic`];
///   non-finite when the raw coefficients overflow it
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Solution {
    pub kind: EquationKind,
    pub roots: Roots,
    pub discriminant: Option<f64>,
}


/// Solves `a·x² + b·x + c = 0`, validating input first.
///
/// # Errors
///
/// ┌ [`SolverError::Tolerance`]            - `cfg.tolerance` <= 0 or not finite.
/// └ [`SolverError::NonFiniteCoefficient`] - `a`, `b` or `c` is NaN or inf.
pub fn solve(
    coefficients: impl Into<Coefficients>,
    cfg: SolverCfg
) -> Result<Solution, SolverError> {
    let cfg = cfg.validate()?;
    let coefficients = coefficients.into();
    coefficients.check_finite()?;

    let Coefficients { a, b, c } = coefficients;
    let tolerance = cfg.tolerance();

    let solution = if approx_equal(a, 0.0, tolerance) {
        let kind = if approx_equal(b, 0.0, tolerance) {
            EquationKind::Degenerate
        } else {
            EquationKind::Linear
        };
        Solution { kind, roots: solve_linear_with(b, c, tolerance), discriminant: None }
    } else {
        Solution {
            kind: EquationKind::Quadratic,
            roots: solve_quadratic_with(a, b, c, tolerance),
            discriminant: Some(discriminant(a, b, c)),
        }
    };

    debug!(
        a, b, c, tolerance,
        kind = %solution.kind,
        count = ?solution.roots.count(),
        "solved equation"
    );
    Ok(solution)
}
