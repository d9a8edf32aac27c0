pub mod app_config;
pub mod auth_config;
pub mod broker_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;
pub mod storage_config;

use std::env;
use std::str::FromStr;

/// Reads `key` and parses it, falling back to `default` when unset or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
