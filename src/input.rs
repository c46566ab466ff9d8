//! Numeric field handling for form front-ends.
//!
//! Calculators in this crate accept their inputs from locale-formatted text
//! fields, where the decimal separator may be a comma or a dot. Parsing and
//! the shared positivity checks live here so every module rejects bad input
//! the same way, before any computation starts.

use crate::errors::ValidationError;
use crate::float_types::Real;

/// Parse a decimal field, accepting `,` or `.` as the decimal separator.
///
/// Surrounding whitespace is ignored. Non-finite results are rejected.
pub fn parse_decimal(raw: &str) -> Result<Real, ValidationError> {
    let trimmed = raw.trim();
    let normalized = trimmed.replace(',', ".");
    let value: Real = normalized
        .parse()
        .map_err(|_| ValidationError::MalformedNumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::MalformedNumber(trimmed.to_string()));
    }
    Ok(value)
}

/// Reject NaN/infinite values, naming the offending field.
pub fn require_finite(value: Real, field: &'static str) -> Result<Real, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite(field));
    }
    Ok(value)
}

/// Finite and strictly greater than zero.
pub fn require_positive(value: Real, field: &'static str) -> Result<Real, ValidationError> {
    require_finite(value, field)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// Finite and greater than or equal to zero.
pub fn require_non_negative(value: Real, field: &'static str) -> Result<Real, ValidationError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}

/// Finite and within `[min, max]`.
pub fn require_in_range(
    value: Real,
    min: Real,
    max: Real,
    field: &'static str,
) -> Result<Real, ValidationError> {
    require_finite(value, field)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(value)
}
