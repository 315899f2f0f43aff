//! Client configuration resolved at build time.
//!
//! A browser bundle has no process environment, so overrides are read with
//! `option_env!` when the WASM artifact is compiled:
//!
//! - `ACTIVITY_BOARD_API_BASE`: URL prefix for every endpoint (default: same origin)
//! - `ACTIVITY_BOARD_TOKEN_KEY`: `localStorage` key for the bearer token (default `token`)
//! - `ACTIVITY_BOARD_NOTICE_SECS`: notice auto-hide delay (default 5)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_NOTICE_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub token_storage_key: String,
    pub notice_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            notice_timeout: Duration::from_secs(DEFAULT_NOTICE_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ACTIVITY_BOARD_API_BASE"),
            option_env!("ACTIVITY_BOARD_TOKEN_KEY"),
            option_env!("ACTIVITY_BOARD_NOTICE_SECS"),
        )
    }

    /// Build config from raw optional values, falling back to defaults for
    /// anything missing, blank, or unparseable.
    pub fn from_values(api_base: Option<&str>, token_key: Option<&str>, notice_secs: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = token_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_owned();
        let secs = notice_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_NOTICE_TIMEOUT_SECS);

        Self { api_base, token_storage_key, notice_timeout: Duration::from_secs(secs) }
    }

    /// Join `path` (which must start with `/`) onto the configured API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
