//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `BACKEND_TYPE` - Storage backend: `memory`, `file`, `redis`, `sqlite`
//!   (default: `memory`; `redis` and `sqlite` are reserved, not implemented)
//! - `BACKEND_FILE_PATH` - Path to the redirects YAML file (required for the
//!   `file` backend)
//! - `BACKEND_FILE_REFRESH_SECONDS` - Reload check interval (default: 5)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Storage backend discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Memory,
    File,
    /// Reserved for a future network-backed variant.
    Redis,
    /// Reserved for a future embedded-database variant.
    Sqlite,
}

impl FromStr for BackendType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("unknown backend type: '{other}'"),
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Redis => "redis",
            Self::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_type: BackendType,
    /// Path to the redirects file. Required when `backend_type` is `File`.
    pub backend_file_path: Option<String>,
    /// How often the file backend checks the source file for changes.
    pub backend_file_refresh_seconds: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_TYPE` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        let backend_type = match env::var("BACKEND_TYPE") {
            Ok(raw) => raw.parse()?,
            Err(_) => BackendType::Memory,
        };

        let backend_file_path = env::var("BACKEND_FILE_PATH").ok();

        let backend_file_refresh_seconds = env::var("BACKEND_FILE_REFRESH_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            backend_type,
            backend_file_path,
            backend_file_refresh_seconds,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file backend is selected without `BACKEND_FILE_PATH`
    /// - `BACKEND_FILE_REFRESH_SECONDS` is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.backend_type == BackendType::File
            && self.backend_file_path.as_deref().unwrap_or("").is_empty()
        {
            anyhow::bail!("BACKEND_FILE_PATH must be set when BACKEND_TYPE is 'file'");
        }

        if self.backend_file_refresh_seconds == 0 {
            anyhow::bail!("BACKEND_FILE_REFRESH_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend: {}", self.backend_type);

        if self.backend_type == BackendType::File {
            tracing::info!(
                "  Redirects file: {} (refresh every {}s)",
                self.backend_file_path.as_deref().unwrap_or("<unset>"),
                self.backend_file_refresh_seconds
            );
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
