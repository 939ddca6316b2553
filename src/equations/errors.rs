//! Equation-solving error types.
//!
//! ┌ [`SolverError`]    : checked-solve runtime errors
//! │   ├ non-finite coefficient
//! │   └ invalid configuration (via [`ToleranceError`])
//! │
//! └ [`ToleranceError`] : tolerance-related errors
//!     └ non-finite or non-positive comparison tolerance


use thiserror::Error;


/// Tolerance configuration errors.
///
/// └ Comparison tolerance must be finite and > 0
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}


/// Errors returned by [`solve`](super::solve::solve).
///
/// ┌ Non-finite coefficient (`a`, `b` or `c` is NaN or inf)
/// └ Invalid configuration
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("coefficient `{name}` must be finite. got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}
