//! Blacklist section - checks if password is in the common password list.

use crate::blacklist::Blacklist;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(reason)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString, blacklist: &Blacklist) -> SectionResult {
    if blacklist.contains(password.expose_secret()) {
        return Some("Password is in the list of most common passwords".to_string());
    }
    None
}
