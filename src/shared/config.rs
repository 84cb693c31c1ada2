//! Environment-backed configuration helpers.
//!
//! Each binary builds one config struct in `main` and passes it down; there
//! are no process-wide configuration globals. A `.env` file is loaded first
//! and never overwrites variables already set in the environment.

/// Load `.env` (if present) and read `key`, falling back to `default`.
pub fn env_or(key: &str, default: &str) -> String {
    let _ = dotenvy::dotenv();
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Like [`env_or`] but parses the value, keeping the default on parse failure.
pub fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    let _ = dotenvy::dotenv();
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
