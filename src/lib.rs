//! Password gate library
//!
//! Decides whether a password is acceptable: at least ten characters and not
//! an exact entry of a list of common passwords. The list is loaded once and
//! passed explicitly to the checker.
//!
//! # Features
//!
//! - `server` (default): axum front end and the `pwd-gate` binary
//! - `fetch`: download the blacklist over HTTP(S)
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_URL`: remote blacklist (default: SecLists top 1000)
//! - `PWD_BLACKLIST_PATH`: local blacklist file, overrides the URL
//!
//! # Example
//!
//! ```rust
//! use pwd_gate::{is_strong, Blacklist};
//!
//! let blacklist = Blacklist::from_text("123456\npassword\nqwerty\n");
//!
//! assert!(is_strong("5TrongP@ssw0rd", &blacklist));
//! assert!(!is_strong("password", &blacklist));
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod sections;

pub mod config;
#[cfg(feature = "server")]
pub mod web;

// Public API
pub use blacklist::{Blacklist, BlacklistError, BlacklistSource, DEFAULT_BLACKLIST_URL};
pub use config::Config;
pub use evaluator::{evaluate_password, is_strong, PasswordEvaluation};
pub use sections::MIN_LENGTH;

#[cfg(feature = "server")]
pub use web::{build_router, AppState};
