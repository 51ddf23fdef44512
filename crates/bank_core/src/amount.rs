//! Parsing of decimal input.
//!
//! Amounts and rates are [`Decimal`] values. Text input is validated strictly:
//! an optional leading `+`/`-`, digits, and at most one `.` or `,` separator.
//! Exponents, thousands separators and empty strings are rejected instead of
//! being coerced.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{EngineError, ResultEngine};

/// Parse a monetary amount.
///
/// ```rust
/// use bank_core::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("10,50").unwrap(), Decimal::new(1050, 2));
/// assert!(parse_amount("1e3").is_err());
/// ```
pub fn parse_amount(input: &str) -> ResultEngine<Decimal> {
    parse_decimal(input).map_err(EngineError::InvalidAmount)
}

/// Parse an interest rate (e.g. `0.05` for 5%).
pub fn parse_rate(input: &str) -> ResultEngine<Decimal> {
    parse_decimal(input).map_err(EngineError::InvalidRate)
}

fn parse_decimal(input: &str) -> Result<Decimal, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }

    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let normalized = unsigned.replace(',', ".");
    let mut parts = normalized.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(format!("invalid decimal: {trimmed}"));
    }

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) {
        return Err(format!("invalid decimal: {trimmed}"));
    }
    if let Some(fraction) = fraction
        && (fraction.is_empty() || !all_digits(fraction))
    {
        return Err(format!("invalid decimal: {trimmed}"));
    }

    let negative = trimmed.starts_with('-');
    let value = Decimal::from_str(&normalized)
        .map_err(|_| format!("decimal out of range: {trimmed}"))?;

    Ok(if negative { -value } else { value })
}
