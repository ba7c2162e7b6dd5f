//! Process configuration, read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::blacklist::{BlacklistSource, DEFAULT_BLACKLIST_URL};

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub blacklist: BlacklistSource,
    pub fetch_timeout: Duration,
    pub max_body_bytes: usize,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            blacklist: BlacklistSource::default(),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_json: false,
        }
    }
}

impl Config {
    /// Reads the configuration.
    ///
    /// `PWD_BLACKLIST_PATH`, when set, takes priority over
    /// `PWD_BLACKLIST_URL`. Values that fail to parse fall back to defaults.
    pub fn from_env() -> Self {
        let blacklist = match env::var("PWD_BLACKLIST_PATH") {
            Ok(path) if !path.trim().is_empty() => BlacklistSource::Path(PathBuf::from(path)),
            _ => BlacklistSource::Url(
                env::var("PWD_BLACKLIST_URL").unwrap_or_else(|_| DEFAULT_BLACKLIST_URL.to_string()),
            ),
        };

        Self {
            bind: env::var("PWD_GATE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            blacklist,
            fetch_timeout: Duration::from_millis(env_parse(
                "PWD_GATE_FETCH_TIMEOUT_MS",
                DEFAULT_FETCH_TIMEOUT_MS,
            )),
            max_body_bytes: env_parse("PWD_GATE_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            log_json: env_bool("PWD_GATE_LOG_JSON", false),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "PWD_GATE_BIND",
        "PWD_BLACKLIST_URL",
        "PWD_BLACKLIST_PATH",
        "PWD_GATE_FETCH_TIMEOUT_MS",
        "PWD_GATE_MAX_BODY_BYTES",
        "PWD_GATE_LOG_JSON",
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for key in VARS {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { std::env::remove_var(key); }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("PWD_GATE_BIND", "127.0.0.1:8080");
        set_env("PWD_BLACKLIST_URL", "http://localhost/list.txt");
        set_env("PWD_GATE_FETCH_TIMEOUT_MS", "250");
        set_env("PWD_GATE_MAX_BODY_BYTES", "1024");
        set_env("PWD_GATE_LOG_JSON", "yes");

        let cfg = Config::from_env();
        assert_eq!(cfg.bind, "127.0.0.1:8080");
        assert_eq!(
            cfg.blacklist,
            BlacklistSource::Url("http://localhost/list.txt".to_string())
        );
        assert_eq!(cfg.fetch_timeout, Duration::from_millis(250));
        assert_eq!(cfg.max_body_bytes, 1024);
        assert!(cfg.log_json);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_path_takes_priority_over_url() {
        clear_env();
        set_env("PWD_BLACKLIST_URL", "http://localhost/list.txt");
        set_env("PWD_BLACKLIST_PATH", "/etc/pwd-gate/blacklist.txt");

        let cfg = Config::from_env();
        assert_eq!(
            cfg.blacklist,
            BlacklistSource::Path(PathBuf::from("/etc/pwd-gate/blacklist.txt"))
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        set_env("PWD_GATE_FETCH_TIMEOUT_MS", "soon");
        set_env("PWD_GATE_LOG_JSON", "maybe");

        let cfg = Config::from_env();
        assert_eq!(cfg.fetch_timeout, Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS));
        assert!(!cfg.log_json);

        clear_env();
    }
}
