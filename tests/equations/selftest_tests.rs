//! tests for the startup self-test
use eqsolve::equations::selftest::{self, SelfTestCase, CASES};
use eqsolve::equations::Roots;

#[test]
fn builtin_cases_pass() {
    let report = selftest::run();
    assert_eq!(report.total, CASES.len());
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn reports_every_mismatch() {
    let cases = [
        SelfTestCase { a: 1.0, b: 3.0, c: -4.0, expected: Roots::Two(-4.0, 1.0), description: "swapped roots" },
        SelfTestCase { a: 1.0, b: 2.0, c:  1.0, expected: Roots::One(-1.0),      description: "ok" },
        SelfTestCase { a: 0.0, b: 0.0, c:  0.0, expected: Roots::Zero,           description: "wrong count" },
    ];

    let report = selftest::run_cases(&cases);

    assert!(!report.passed());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].got, Roots::Two(1.0, -4.0));
    assert_eq!(report.failures[1].index, 3);
    assert_eq!(report.failures[1].got, Roots::Infinite);
    assert!(report.failures[1].to_string().starts_with("test 3 (wrong count) was not passed"));
}

#[test]
fn comparison_is_bitwise() {
    let cases = [SelfTestCase {
        a: 1.0, b: 2.0, c: 1.0,
        expected: Roots::One(-1.0 + f64::EPSILON),
        description: "off by one ulp",
    }];
    assert!(!selftest::run_cases(&cases).passed());
}
