mod support;

use crate::support::approx_eq;
use mechrs::errors::ValidationError;
use mechrs::input::{parse_decimal, require_in_range, require_non_negative, require_positive};

#[test]
fn decimal_comma_and_dot_both_parse() {
    assert!(approx_eq(parse_decimal("12.5").unwrap(), 12.5, 1e-12));
    assert!(approx_eq(parse_decimal("12,5").unwrap(), 12.5, 1e-12));
    assert!(approx_eq(parse_decimal("  0,25  ").unwrap(), 0.25, 1e-12));
    assert!(approx_eq(parse_decimal("-3,0").unwrap(), -3.0, 1e-12));
}

#[test]
fn garbage_fields_are_named_back() {
    assert_eq!(
        parse_decimal("abc"),
        Err(ValidationError::MalformedNumber("abc".to_string()))
    );
    assert_eq!(
        parse_decimal(""),
        Err(ValidationError::MalformedNumber(String::new()))
    );
    // NaN/inf spellings parse as floats but are not usable field values
    assert!(parse_decimal("NaN").is_err());
    assert!(parse_decimal("inf").is_err());
}

#[test]
fn positivity_checks_carry_the_field_name() {
    assert_eq!(
        require_positive(0.0, "lift H (mm)"),
        Err(ValidationError::NotPositive("lift H (mm)"))
    );
    assert_eq!(require_positive(2.0, "lift H (mm)"), Ok(2.0));
    assert_eq!(
        require_non_negative(-0.1, "offset e (mm)"),
        Err(ValidationError::Negative("offset e (mm)"))
    );
    assert_eq!(require_non_negative(0.0, "offset e (mm)"), Ok(0.0));
    assert_eq!(
        require_in_range(75.0, 0.0, 60.0, "incline angle (deg)"),
        Err(ValidationError::OutOfRange {
            field: "incline angle (deg)",
            min: 0.0,
            max: 60.0,
        })
    );
}

#[test]
fn error_messages_read_as_sentences() {
    let message = ValidationError::AnglesExceedRotation { total: 361.0 }.to_string();
    assert!(message.contains("exceed a full rotation"));
    assert!(message.contains("361"));

    let message = ValidationError::NotPositive("base radius Rb (mm)").to_string();
    assert_eq!(message, "base radius Rb (mm) must be greater than zero");
}
