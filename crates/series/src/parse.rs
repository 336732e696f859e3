//! Parsing of comma-separated price input.

use tallybook_core::{DomainError, DomainResult};

use crate::series::NumericSeries;

/// Parse a single decimal value.
///
/// Surrounding whitespace is ignored; `inf`, `NaN` and friends are rejected.
pub fn parse_decimal(token: &str) -> DomainResult<f64> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(DomainError::parse(format!(
            "`{token}` is not a finite number"
        ))),
        Err(_) => Err(DomainError::parse(format!("`{token}` is not a number"))),
    }
}

/// Parse a comma-separated batch such as `3.00, 3.45, 5.11`.
///
/// The batch is all-or-nothing: one bad token rejects the whole line.
/// Trailing empty fields (`"1, 2,"`) are dropped; empty fields elsewhere are
/// errors.
pub fn parse_series(input: &str) -> DomainResult<NumericSeries> {
    let mut tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err(DomainError::parse("no values entered"));
    }

    let values = tokens
        .into_iter()
        .map(parse_decimal)
        .collect::<DomainResult<Vec<f64>>>()?;

    NumericSeries::new(values)
}
