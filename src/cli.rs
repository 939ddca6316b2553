use clap::{ArgAction, Parser};

use eqsolve::equations::SolverCfg;

#[derive(Debug, Parser)]
#[command(
    name = "eqsolve",
    about = "Solve a·x² + b·x + c = 0 over the reals",
    version
)]
pub struct EqsolveCli {
    /// Coefficients `a b c`; prompted for on stdin when omitted
    #[arg(value_name = "COEFF", num_args = 3, allow_negative_numbers = true)]
    pub coefficients: Option<Vec<String>>,

    /// Absolute tolerance for treating a coefficient or discriminant as zero
    #[arg(long = "tolerance", value_name = "EPS", default_value_t = SolverCfg::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Skip the startup self-test
    #[arg(long = "skip-self-test", action = ArgAction::SetTrue)]
    pub skip_self_test: bool,
}
