//! Configuration module for the site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::session::Credentials;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Operator login for the admin pages
    pub admin: Credentials,
    /// Optional JSON file replacing the built-in example content
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let raw_addr = env::var("SITE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid SITE_BIND_ADDR {}: {}", raw_addr, e)))?;

        let log_level = env::var("SITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("SITE_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let admin = Credentials {
            username: env::var("SITE_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: env::var("SITE_ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string()),
        };

        let seed_path = env::var("SITE_SEED_PATH").ok().map(PathBuf::from);

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            admin,
            seed_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "SITE_BIND_ADDR",
        "SITE_LOG_LEVEL",
        "SITE_LOG_FORMAT",
        "SITE_ADMIN_USERNAME",
        "SITE_ADMIN_PASSWORD",
        "SITE_SEED_PATH",
    ];

    // Both cases share the process environment, so they run in one test.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password, "password");
        assert!(config.seed_path.is_none());

        env::set_var("SITE_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        for var in VARS {
            env::remove_var(var);
        }
    }
}
