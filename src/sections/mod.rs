//! Password evaluation sections
//!
//! Each section checks one requirement and reports why it failed.

mod blacklist;
mod length;

pub use blacklist::blacklist_section;
pub use length::{length_section, MIN_LENGTH};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
