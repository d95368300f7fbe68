//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3333`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_PAGE_SIZE` - Links per page when the client sends none (default: 20)
//! - `MAX_PAGE_SIZE` - Largest page a client may request (default: 100, max: 1000)
//! - `EXPORT_FILENAME` - Filename offered for CSV downloads (default: `links.csv`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::services::PageLimits;
use crate::utils::csv_exporter::DEFAULT_EXPORT_FILENAME;

const PAGE_SIZE_CEILING: u32 = 1000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub export_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3333".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_page_size: PageLimits::default().default_size,
            max_page_size: PageLimits::default().max_size,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE")?
                .unwrap_or(defaults.default_page_size),
            max_page_size: parse_var("MAX_PAGE_SIZE")?.unwrap_or(defaults.max_page_size),
            export_filename: env::var("EXPORT_FILENAME").unwrap_or(defaults.export_filename),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - page sizes break `1 <= DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE <= 1000`
    /// - `export_filename` is empty or does not end in `.csv`
    pub fn validate(&self) -> Result<()> {
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

        if self.default_page_size == 0 {
            anyhow::bail!("DEFAULT_PAGE_SIZE must be at least 1");
        }

        if self.max_page_size > PAGE_SIZE_CEILING {
            anyhow::bail!(
                "MAX_PAGE_SIZE is too large (max: {PAGE_SIZE_CEILING}), got {}",
                self.max_page_size
            );
        }

        if self.default_page_size > self.max_page_size {
            anyhow::bail!(
                "DEFAULT_PAGE_SIZE ({}) must not exceed MAX_PAGE_SIZE ({})",
                self.default_page_size,
                self.max_page_size
            );
        }

        let stem = self.export_filename.strip_suffix(".csv");
        if !matches!(stem, Some(s) if !s.is_empty()) {
            anyhow::bail!(
                "EXPORT_FILENAME must be a non-empty name ending in '.csv', got '{}'",
                self.export_filename
            );
        }

        Ok(())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.default_page_size,
            max_size: self.max_page_size,
        }
    }

    /// Logs the configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Page size: default {}, max {}",
            self.default_page_size,
            self.max_page_size
        );
        tracing::info!("  Export filename: {}", self.export_filename);
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
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
