//! Process configuration read from environment variables.
//!
//! | Variable               | Default                                         |
//! |------------------------|-------------------------------------------------|
//! | `BACKEND_HOST`         | `0.0.0.0`                                       |
//! | `BACKEND_PORT`         | `3001`                                          |
//! | `LEADERBOARD_PATH`     | `leaderboard.json` (empty string: memory only)  |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000,http://127.0.0.1:3000`   |
//! | `LOG_FORMAT`           | `json` (`pretty` for local development)         |

use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.json";
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` keeps the leaderboard in memory only.
    pub leaderboard_path: Option<PathBuf>,
    pub cors_allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
        };

        let leaderboard_path = match lookup("LEADERBOARD_PATH") {
            None => Some(PathBuf::from(DEFAULT_LEADERBOARD_PATH)),
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(AppError::config(format!(
                    "LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
                )))
            }
        };

        Ok(Self {
            host,
            port,
            leaderboard_path,
            cors_allowed_origins: parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref()),
            log_format,
        })
    }
}

/// Comma-separated origins; empty, `null` and non-http(s) entries are dropped.
/// Falls back to localhost-only when nothing valid remains.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
