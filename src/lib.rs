//! Real roots of linear and quadratic equations.
//!
//! ```
//! use eqsolve::equations::{solve_quadratic, Roots};
//!
//! assert_eq!(solve_quadratic(1.0, 3.0, -4.0), Roots::Two(1.0, -4.0));
//! ```
pub mod console;
pub mod equations;
