mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use eqsolve::console::{parse_tokens, read_coefficients, render};
use eqsolve::equations::{selftest, solve, Coefficients, SolverCfg};

use crate::cli::EqsolveCli;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = EqsolveCli::parse();

    if !args.skip_self_test {
        let report = selftest::run();
        if !report.passed() {
            for failure in &report.failures {
                error!("{failure}");
            }
            return Ok(ExitCode::FAILURE);
        }
        info!(cases = report.total, "self-test passed");
    }

    let coefficients = match &args.coefficients {
        Some(tokens) => parse_tokens(tokens.iter().map(String::as_str))
            .context("invalid coefficients")?,
        None => prompt()?,
    };

    let cfg = SolverCfg::new().with_tolerance(args.tolerance);
    let solution = solve(coefficients, cfg).context("cannot solve equation")?;
    info!(kind = %solution.kind, discriminant = ?solution.discriminant, "solved");

    println!("{}", render(&solution.roots));
    Ok(ExitCode::SUCCESS)
}

fn prompt() -> anyhow::Result<Coefficients> {
    let mut stdout = io::stdout();
    writeln!(stdout, "This program solves quadratic equation.\n")?;
    write!(stdout, "Enter three coefficients to get roots:")?;
    stdout.flush()?;

    read_coefficients(io::stdin().lock()).context("invalid coefficients")
}
