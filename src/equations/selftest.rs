//! Startup self-test.
//!
//! Runs a fixed table of corner cases through
//! [`solve_quadratic`](super::quadratic::solve_quadratic) and compares the
//! results exactly: same [`Roots`] variant, bitwise-equal root values.

use super::quadratic::solve_quadratic;
use super::roots::Roots;


/// One row of the self-test table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelfTestCase {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub expected: Roots,
    pub description: &'static str,
}


/// Canonical corner cases.
pub const CASES: [SelfTestCase; 6] = [
    SelfTestCase { a: 1.0, b: 3.0, c: -4.0, expected: Roots::Two(1.0, -4.0), description: "x^2 + 3x - 4, quadratic main case" },
    SelfTestCase { a: 0.0, b: 2.0, c: -2.0, expected: Roots::One(1.0),       description: "2x - 2, linear main case" },
    SelfTestCase { a: 1.0, b: 2.0, c:  1.0, expected: Roots::One(-1.0),      description: "x^2 + 2x + 1, zero discriminant" },
    SelfTestCase { a: 1.0, b: 2.0, c:  3.0, expected: Roots::Zero,           description: "x^2 + 2x + 3, negative discriminant" },
    SelfTestCase { a: 0.0, b: 0.0, c: 30.0, expected: Roots::Zero,           description: "30, linear contradiction" },
    SelfTestCase { a: 0.0, b: 0.0, c:  0.0, expected: Roots::Infinite,       description: "0, degenerate identity" },
];


/// A case whose result did not match.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelfTestFailure {
    /// 1-based position in the table.
    pub index: usize,
    pub case: SelfTestCase,
    pub got: Roots,
}
impl std::fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "test {} ({}) was not passed: expected {:?}, got {:?}",
            self.index, self.case.description, self.case.expected, self.got
        )
    }
}


/// Outcome of [`run`] / [`run_cases`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfTestReport {
    pub total: usize,
    pub failures: Vec<SelfTestFailure>,
}
impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}


/// Runs the built-in [`CASES`].
pub fn run() -> SelfTestReport {
    run_cases(&CASES)
}


/// Runs every case, collecting all mismatches instead of stopping at the first.
pub fn run_cases(cases: &[SelfTestCase]) -> SelfTestReport {
    let failures = cases
        .iter()
        .enumerate()
        .filter_map(|(i, case)| {
            let got = solve_quadratic(case.a, case.b, case.c);
            (!got.bits_eq(&case.expected)).then_some(SelfTestFailure { index: i + 1, case: *case, got })
        })
        .collect();

    SelfTestReport { total: cases.len(), failures }
}
