//! Amount input parsing.
//!
//! Raw text from an amount field is read here and nowhere else. A failed read
//! is reported as an [`AmountError`] so callers can flag the field, while the
//! totals treat the field as zero.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::AmountError;

/// Parses a raw amount entry.
///
/// Leading and trailing whitespace is ignored. Plain decimal notation
/// ("1500", "-20.75") and scientific notation ("1.5e3") are accepted.
///
/// # Examples
///
/// ```
/// use salary_draft::calculation::parse_amount;
/// use salary_draft::error::AmountError;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 5000 "), Ok(Decimal::new(5000, 0)));
/// assert_eq!(parse_amount(""), Err(AmountError::Empty));
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AmountError::NotANumber {
            input: trimmed.to_string(),
        })
}

/// Reads a raw amount entry, treating anything unreadable as zero.
pub fn coerce_amount(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}
