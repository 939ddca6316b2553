//! Console front end: reading coefficients and printing results.
pub mod input;
pub mod present;

pub use input::{parse_coefficients, parse_tokens, read_coefficients, InputError};
pub use present::{format_g, render};
