//! Solver configuration.
//!
//! [`SolverCfg`]
//! └ `tolerance` : absolute tolerance used to decide whether a coefficient
//!                 or the discriminant is zero
//!
//! [`SolverCfg::new`] initializes configuration with default values.
//! Validation happens in [`solve`](super::solve::solve) via [`SolverCfg::validate`].

use super::compare::DEFAULT_TOLERANCE;
use super::errors::ToleranceError;


/// Solver Configuration
///
/// # Defaults
///
/// └ DEFAULT_TOLERANCE - `1e-9`
///
/// # Validation:
/// └ `tolerance` > 0 and finite
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tolerance: Option<f64>,
}
impl SolverCfg {
    pub const DEFAULT_TOLERANCE: f64 = DEFAULT_TOLERANCE;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tolerance(mut self, v: f64) -> Self { self.tolerance = Some(v); self }

    #[inline] #[must_use] pub fn tolerance(&self) -> f64 { self.tolerance.unwrap_or(Self::DEFAULT_TOLERANCE) }

    pub fn validate(&self) -> Result<SolverCfg, ToleranceError> {
        let tolerance = self.tolerance();
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ToleranceError::InvalidTolerance { got: tolerance });
        }
        Ok(Self { tolerance: Some(tolerance) })
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self { tolerance: Some(Self::DEFAULT_TOLERANCE) }
    }
}
