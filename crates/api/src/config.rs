use std::path::PathBuf;

use skilledit_core::units::{BalanceRules, DEFAULT_ATTRIBUTE_CAP, DEFAULT_SKILL_CAP};
use skilledit_db::repositories::skill_repo::COMBAT_SKILL_GROUP;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local game server. Override via
/// environment variables (or a `.env` file) in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8099`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// `skill_types.group_id` forming the editable catalog (default: combat).
    pub skill_group: i32,
    /// Skill and attribute caps.
    pub rules: BalanceRules,
    /// HTML page served at `/`, if any.
    pub static_page: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8099`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:8099`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `SKILL_GROUP`          | `2`                      |
    /// | `SKILL_CAP`            | `600`                    |
    /// | `ATTRIBUTE_CAP`        | `150`                    |
    /// | `STATIC_PAGE`          | unset                    |
    /// | `LOG_FORMAT`           | `text` (`json` to switch)|
    ///
    /// Panics on malformed numbers so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8099".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8099".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let skill_group: i32 = std::env::var("SKILL_GROUP")
            .map(|v| v.parse().expect("SKILL_GROUP must be a valid i32"))
            .unwrap_or(COMBAT_SKILL_GROUP);

        let skill_cap: i64 = std::env::var("SKILL_CAP")
            .map(|v| v.parse().expect("SKILL_CAP must be a valid i64"))
            .unwrap_or(DEFAULT_SKILL_CAP);

        let attribute_cap: i64 = std::env::var("ATTRIBUTE_CAP")
            .map(|v| v.parse().expect("ATTRIBUTE_CAP must be a valid i64"))
            .unwrap_or(DEFAULT_ATTRIBUTE_CAP);

        let static_page = std::env::var("STATIC_PAGE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            skill_group,
            rules: BalanceRules {
                skill_cap,
                attribute_cap,
            },
            static_page,
            log_json,
        }
    }
}
