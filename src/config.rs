//! Configuration module
//!
//! TOML application configuration with per-section defaults. Any section
//! or key may be omitted; the built-in defaults reproduce the standard
//! Chikukwa deployment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub company: CompanyInfo,
    pub booking: BookingConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Database URL (e.g. "sqlite://./chikukwa.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./chikukwa.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable with RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Company display metadata surfaced through the public config endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Chikukwa Bus Services".to_string(),
            contact_phone: "+263777189947".to_string(),
            contact_email: "support@chikukwabus.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Uniform seat capacity per journey, across all routes
    pub total_seats: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            total_seats: crate::domain::catalog::defaults::DEFAULT_TOTAL_SEATS,
        }
    }
}

/// Operator account as configured; the password is bcrypt-hashed at
/// startup and only the hash is kept in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub accounts: Vec<AdminAccount>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            accounts: vec![
                AdminAccount {
                    username: "admin".to_string(),
                    password: "admin123".to_string(),
                },
                AdminAccount {
                    username: "manager".to_string(),
                    password: "manager123".to_string(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config location: `~/.config/chikukwa-bus/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chikukwa-bus")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
