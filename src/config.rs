// src/config.rs

use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://*.vercel.app";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Socket the HTTP server listens on (`BIND_ADDRESS`).
    pub bind_address: SocketAddr,

    /// Browser origins allowed by CORS (`ALLOWED_ORIGINS`).
    pub allowed_origins: AllowedOrigins,

    /// Per-event engine diagnostics for every run (`ENGINE_LOGGING`).
    pub engine_logging: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let bind_address = bind.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDRESS",
            value: bind.clone(),
        })?;

        let origins = lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.into());
        let allowed_origins = AllowedOrigins::parse(&origins);

        let engine_logging = match lookup("ENGINE_LOGGING") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "ENGINE_LOGGING",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            bind_address,
            allowed_origins,
            engine_logging,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: AllowedOrigins::parse(DEFAULT_ALLOWED_ORIGINS),
            engine_logging: false,
        }
    }
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    /// Exact origins, or patterns with a single `*` wildcard.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parses a comma-separated list; a `*` entry allows every origin.
    pub fn parse(raw: &str) -> Self {
        let entries: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        if entries.iter().any(|entry| entry == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(entries)
        }
    }

    pub fn permits(&self, origin: &str) -> bool {
        match self {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(patterns) => patterns
                .iter()
                .any(|pattern| origin_matches(pattern, origin)),
        }
    }
}

fn origin_matches(pattern: &str, origin: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            origin.len() > prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
        None => pattern == origin,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
