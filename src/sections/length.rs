//! Length section - checks password minimum length.

use crate::blacklist::Blacklist;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Minimum number of characters, counted as Unicode scalar values.
pub const MIN_LENGTH: usize = 10;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString, _blacklist: &Blacklist) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        length_section(&SecretString::new(pwd.into()), &Blacklist::default())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            check("Short1!xx"),
            Some("Password must be at least 10 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_empty() {
        assert!(check("").is_some());
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(check("1234567890"), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 9 characters, 18 bytes
        assert!(check("ééééééééé").is_some());
        assert_eq!(check("éééééééééé"), None);
    }
}
