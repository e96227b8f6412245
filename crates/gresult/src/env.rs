//! Environment variable helpers
//!
//! Runtime configuration of the crate (currently only logging) is read
//! from the environment through these helpers.
//!
//! ```ignore
//! use gresult::env::{env_get, env_get_bool};
//! use gresult::kprint::LogLevel;
//!
//! let flush = env_get_bool("GRESULT_FLUSH_EPRINT", false);
//! let level: LogLevel = env_get("GRESULT_LOG_LEVEL", LogLevel::Warn);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default
///
/// Unset variables and values that fail to parse both yield `default`.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Get environment variable as boolean
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_returns_default() {
        let val: u8 = env_get("__GRESULT_TEST_UNSET__", 3);
        assert_eq!(val, 3);
        assert!(env_get_bool("__GRESULT_TEST_UNSET__", true));
    }

    #[test]
    fn parses_set_values() {
        std::env::set_var("__GRESULT_TEST_NUM__", " 4 ");
        let val: u8 = env_get("__GRESULT_TEST_NUM__", 0);
        assert_eq!(val, 4);
        std::env::remove_var("__GRESULT_TEST_NUM__");

        std::env::set_var("__GRESULT_TEST_BAD__", "four");
        let val: u8 = env_get("__GRESULT_TEST_BAD__", 9);
        assert_eq!(val, 9);
        std::env::remove_var("__GRESULT_TEST_BAD__");
    }

    #[test]
    fn bool_variants() {
        for truthy in ["1", "true", "TRUE", "yes", "on"] {
            std::env::set_var("__GRESULT_TEST_BOOL__", truthy);
            assert!(env_get_bool("__GRESULT_TEST_BOOL__", false), "{}", truthy);
        }
        for falsy in ["0", "false", "garbage"] {
            std::env::set_var("__GRESULT_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__GRESULT_TEST_BOOL__", true), "{}", falsy);
        }
        std::env::remove_var("__GRESULT_TEST_BOOL__");
    }
}
