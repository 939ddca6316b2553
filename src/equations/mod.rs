// common helpers
pub mod compare;
pub mod config;
pub mod errors;
pub mod roots;

// solvers
pub mod linear;
pub mod quadratic;
pub mod solve;

pub mod selftest;

pub use compare::{approx_equal, approx_equal_default, DEFAULT_TOLERANCE};
pub use config::SolverCfg;
pub use errors::{SolverError, ToleranceError};
pub use linear::{solve_linear, solve_linear_with};
pub use quadratic::{discriminant, solve_quadratic, solve_quadratic_with};
pub use roots::{RootCount, Roots};
pub use solve::{solve, Coefficients, EquationKind, Solution};
