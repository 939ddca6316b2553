//! Collecting coefficients from text.
//!
//! Coefficients are whitespace separated and may span several lines, so
//! `1 2` followed by `3` on the next line reads as `(1, 2, 3)`.

use std::io::BufRead;

use thiserror::Error;

use crate::equations::Coefficients;

const NAMES: [&str; 3] = ["a", "b", "c"];


#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected 3 coefficients, got {got}")]
    WrongCount { got: usize },

    #[error("coefficient `{name}` is not a number: {token:?}")]
    InvalidNumber { name: &'static str, token: String },

    #[error("coefficient `{name}` must be finite. got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("failed to read coefficients")]
    Io(#[from] std::io::Error),
}


/// Parses exactly three finite coefficients out of `tokens`.
pub fn parse_tokens<'a, I>(tokens: I) -> Result<Coefficients, InputError>
where I: IntoIterator<Item = &'a str> {
    let tokens: Vec<&str> = tokens.into_iter().collect();
    if tokens.len() != NAMES.len() {
        return Err(InputError::WrongCount { got: tokens.len() });
    }

    let mut values = [0.0; 3];
    for ((slot, name), token) in values.iter_mut().zip(NAMES).zip(tokens) {
        let value: f64 = token
            .parse()
            .map_err(|_| InputError::InvalidNumber { name, token: token.to_owned() })?;
        if !value.is_finite() {
            return Err(InputError::NonFinite { name, value });
        }
        *slot = value;
    }

    let [a, b, c] = values;
    Ok(Coefficients::new(a, b, c))
}


/// Parses a single line such as `"1 -3 2"`.
pub fn parse_coefficients(line: &str) -> Result<Coefficients, InputError> {
    parse_tokens(line.split_whitespace())
}


/// Reads lines from `reader` until three tokens are collected.
///
/// # Errors
/// ┌ [`InputError::WrongCount`]    - input ended early, or a line overshoots three tokens
/// ├ [`InputError::InvalidNumber`] - a token does not parse as `f64`
/// ├ [`InputError::NonFinite`]     - a token parses to NaN or inf
/// └ [`InputError::Io`]            - the reader failed
pub fn read_coefficients<R: BufRead>(reader: R) -> Result<Coefficients, InputError> {
    let mut tokens: Vec<String> = Vec::with_capacity(NAMES.len());
    for line in reader.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_owned));
        if tokens.len() >= NAMES.len() {
            break;
        }
    }
    parse_tokens(tokens.iter().map(String::as_str))
}
