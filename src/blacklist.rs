//! Blacklist management module
//!
//! Handles loading and querying the set of disallowed passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
#[cfg(feature = "fetch")]
use std::time::Duration;
use thiserror::Error;

/// Top-1000 list from SecLists, one password per line.
pub const DEFAULT_BLACKLIST_URL: &str = "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/Common-Credentials/10-million-password-list-top-1000.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    Read(#[from] std::io::Error),
    #[cfg(feature = "fetch")]
    #[error("Failed to fetch blacklist: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Blacklist is empty")]
    Empty,
}

/// Immutable set of passwords that are rejected outright.
///
/// Matching is exact and case-sensitive. Once built the set is never
/// modified; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Parses one entry per line. Blank lines are skipped, everything else
    /// is kept verbatim.
    pub fn from_text(text: &str) -> Self {
        text.lines().filter(|l| !l.is_empty()).collect()
    }

    /// Loads the blacklist from a local file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::non_empty(Self::from_text(&content))?;

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Downloads the blacklist over HTTP(S).
    ///
    /// Non-success status codes are errors, as is a body with no entries.
    #[cfg(feature = "fetch")]
    pub async fn fetch(url: &str, timeout: Duration) -> Result<Self, BlacklistError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let body = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let blacklist = Self::non_empty(Self::from_text(&body))?;

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist fetched: {} passwords from {}", blacklist.len(), url);

        Ok(blacklist)
    }

    fn non_empty(blacklist: Self) -> Result<Self, BlacklistError> {
        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: no entries");
            return Err(BlacklistError::Empty);
        }
        Ok(blacklist)
    }

    /// Returns `true` if `password` is an exact entry of the list.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where the blacklist comes from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlacklistSource {
    Url(String),
    Path(PathBuf),
}

impl BlacklistSource {
    #[cfg(feature = "fetch")]
    pub async fn load(&self, timeout: Duration) -> Result<Blacklist, BlacklistError> {
        match self {
            Self::Url(url) => Blacklist::fetch(url, timeout).await,
            Self::Path(path) => Blacklist::from_path(path),
        }
    }
}

impl Default for BlacklistSource {
    fn default() -> Self {
        Self::Url(DEFAULT_BLACKLIST_URL.to_string())
    }
}
