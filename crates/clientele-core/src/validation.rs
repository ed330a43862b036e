//! Per-field validation rules for customer payloads.
//!
//! Each rule is a plain predicate over one field that records a
//! [`FieldViolation`](clientele_types::validation::FieldViolation) on failure.
//! [`validate_customer`] runs every rule and reports all failures at once.
//!
//! `phoneNumber` and `email` are trimmed before their format is checked, and
//! the trimmed values are what gets stored. Other text fields are kept as sent.

use clientele_types::customer::{CustomerFields, CustomerInput};
use clientele_types::validation::ValidationReport;
use validator::ValidateEmail;

pub const FIRST_NAME: &str = "fName";
pub const LAST_NAME: &str = "lName";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const EMAIL: &str = "email";
pub const ADDRESS: &str = "address";

/// Record a violation unless `value` is present and not blank.
///
/// Returns the value when the rule passes.
pub fn require_non_empty(
    report: &mut ValidationReport,
    field: &str,
    value: Option<&str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            report.push(field, "is required");
            None
        }
    }
}

/// True if `value` is non-empty and made of ASCII digits only.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// True if `value` is a syntactically valid email address whose domain
/// ends in a non-empty top-level label (`john@localhost` is rejected).
pub fn is_email(value: &str) -> bool {
    value.validate_email() && has_top_level_domain(value)
}

fn has_top_level_domain(value: &str) -> bool {
    value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Trim `value` and record a violation unless it is numeric.
pub fn check_numeric(report: &mut ValidationReport, field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if is_numeric(trimmed) {
        Some(trimmed.to_string())
    } else {
        report.push(field, "must contain only digits");
        None
    }
}

/// Trim `value` and record a violation unless it is a valid email.
pub fn check_email(report: &mut ValidationReport, field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if is_email(trimmed) {
        Some(trimmed.to_string())
    } else {
        report.push(field, "must be a valid email address");
        None
    }
}

/// Apply every customer rule to `input`.
///
/// A missing field is reported once as required; its format rule is skipped.
/// `midName` is optional and carried through untouched.
pub fn validate_customer(input: &CustomerInput) -> Result<CustomerFields, ValidationReport> {
    let mut report = ValidationReport::new();

    let first_name = require_non_empty(&mut report, FIRST_NAME, input.first_name.as_deref());
    let last_name = require_non_empty(&mut report, LAST_NAME, input.last_name.as_deref());
    let phone_number = require_non_empty(&mut report, PHONE_NUMBER, input.phone_number.as_deref())
        .and_then(|v| check_numeric(&mut report, PHONE_NUMBER, &v));
    let email = require_non_empty(&mut report, EMAIL, input.email.as_deref())
        .and_then(|v| check_email(&mut report, EMAIL, &v));
    let address = require_non_empty(&mut report, ADDRESS, input.address.as_deref());

    match (first_name, last_name, phone_number, email, address) {
        (Some(first_name), Some(last_name), Some(phone_number), Some(email), Some(address))
            if report.is_empty() =>
        {
            Ok(CustomerFields {
                first_name,
                last_name,
                middle_name: input.middle_name.clone(),
                phone_number,
                email,
                address,
            })
        }
        _ => Err(report),
    }
}
