//! Field patterns shared by the validators.
//!
//! Compiled once and reused; every pattern is anchored so it describes the
//! whole value rather than a substring.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Letters and spaces only. A letter may carry combining marks
    /// (e + U+0301), but a mark never stands on its own.
    pub static ref NAME_PATTERN: Regex = Regex::new(
        r"^(?:\p{L}\p{M}*|\s)+$"
    ).unwrap();

    /// Permissive `local@domain.tld` shape, not RFC 5322.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    /// ASCII digits, whitespace, `+`, `-` and parentheses.
    pub static ref PHONE_PATTERN: Regex = Regex::new(
        r"^[0-9\s+()\-]+$"
    ).unwrap();
}

/// Check if `value` is made only of letters and spaces.
pub fn is_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Check if `value` has the `x@y.z` shape.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check if `value` only contains phone characters.
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}
