//! Reusable field validation rules.
//!
//! Every rule returns `None` on pass and `Some(message)` on failure.
//! Shape rules treat empty input as passing; pair them with [`required`]
//! when a value is mandatory.

use crate::types::Timestamp;
use std::fmt::Display;

/// Value must be non-empty after trimming.
#[must_use]
pub fn required(value: &str, label: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{label} is required"))
}

#[must_use]
pub fn min_length(value: &str, min: usize, label: &str) -> Option<String> {
    if value.is_empty() || value.chars().count() >= min {
        return None;
    }

    Some(format!("{label} must be at least {min} characters"))
}

#[must_use]
pub fn max_length(value: &str, max: usize, label: &str) -> Option<String> {
    if value.chars().count() <= max {
        return None;
    }

    Some(format!("{label} cannot exceed {max} characters"))
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// dotted domain. Not an RFC 5322 validator.
#[must_use]
pub fn email(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };

    (!valid).then(|| "invalid email address".to_string())
}

/// Letters, digits, and underscore only.
#[must_use]
pub fn username(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    (!valid).then(|| "username may only contain letters, digits, and underscore".to_string())
}

/// Requires at least one uppercase letter, one lowercase letter, and one digit.
#[must_use]
pub fn strong_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let has_upper = value.chars().any(char::is_uppercase);
    let has_lower = value.chars().any(char::is_lowercase);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    (!(has_upper && has_lower && has_digit)).then(|| {
        "password must contain an uppercase letter, a lowercase letter, and a digit".to_string()
    })
}

/// Digits only after stripping spaces and dashes; leading 0; 10-11 digits.
#[must_use]
pub fn phone_number(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let digits: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let valid = digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit())
        && (10..=11).contains(&digits.chars().count());

    (!valid).then(|| "phone number must start with 0 and have 10-11 digits".to_string())
}

/// Absolute http(s) URL with a non-empty host part.
#[must_use]
pub fn url(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));

    let valid = rest.is_some_and(|rest| {
        let host = rest.split(['/', '?', '#']).next().unwrap_or("");
        !host.is_empty() && !host.contains(char::is_whitespace)
    });

    (!valid).then(|| "URL must start with http:// or https://".to_string())
}

/// Timestamp must not lie beyond `now`.
#[must_use]
pub fn not_in_future(value: Timestamp, now: Timestamp, label: &str) -> Option<String> {
    (value > now).then(|| format!("{label} cannot be in the future"))
}

/// Inclusive range check over any ordered, displayable value.
#[must_use]
pub fn in_range<T: PartialOrd + Display>(
    value: &T,
    min: &T,
    max: &T,
    label: &str,
) -> Option<String> {
    (value < min || value > max).then(|| format!("{label} must be between {min} and {max}"))
}

/// `value` must be strictly greater than `other`.
#[must_use]
pub fn greater_than<T: PartialOrd>(
    value: &T,
    other: &T,
    label: &str,
    other_label: &str,
) -> Option<String> {
    (value <= other).then(|| format!("{label} must be greater than {other_label}"))
}

/// Two fields must hold the same value (password confirmation).
#[must_use]
pub fn matches_field<T: PartialEq>(value: &T, other: &T, label: &str) -> Option<String> {
    (value != other).then(|| format!("{label} does not match"))
}
