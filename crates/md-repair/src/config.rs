//! Configuration parsing for repair settings
//!
//! Settings live in a small TOML file. Every key is optional and falls back to
//! the built-in constants:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [at_symbol]
//! enabled = true
//! literal = "@"
//! marker = "{-at-}"
//! restored_form = "&#64;"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::chain::RepairChain;
use crate::error::{Error, Result};
use crate::logging;
use crate::protector::{AT_HTML_ENTITY, MARKER, PROTECTED_LITERAL, PlaceholderProtector};

fn default_level() -> String {
    "info".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_literal() -> char {
    PROTECTED_LITERAL
}

fn default_marker() -> String {
    MARKER.to_string()
}

fn default_restored_form() -> String {
    AT_HTML_ENTITY.to_string()
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// At-symbol protection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtSymbolSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Character hidden from the parser
    #[serde(default = "default_literal")]
    pub literal: char,

    /// Placeholder written in its place
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Value written back after parsing
    #[serde(default = "default_restored_form")]
    pub restored_form: String,
}

impl Default for AtSymbolSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            literal: default_literal(),
            marker: default_marker(),
            restored_form: default_restored_form(),
        }
    }
}

/// Repair configuration parsed from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepairConfig {
    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub at_symbol: AtSymbolSection,
}

impl RepairConfig {
    /// Parse a configuration from TOML content
    ///
    /// The result is validated before it is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use md_repair::config::RepairConfig;
    ///
    /// let config = RepairConfig::parse(r#"
    /// [at_symbol]
    /// marker = "[[at]]"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.at_symbol.marker, "[[at]]");
    /// assert_eq!(config.at_symbol.restored_form, "&#64;");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: RepairConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading repair config");

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::invalid_config("logging.level", "must not be empty"));
        }
        logging::default_filter(&self.logging.level)
            .map_err(|e| Error::invalid_config("logging.level", e.to_string()))?;
        // Building the protector runs the marker checks.
        self.protector().map(|_| ())
    }

    /// Build a protector from the `[at_symbol]` section
    ///
    /// The protector is built even when the section is disabled.
    pub fn protector(&self) -> Result<PlaceholderProtector> {
        let section = &self.at_symbol;
        PlaceholderProtector::with_settings(section.literal, &section.marker, &section.restored_form)
            .map_err(|e| match e {
                Error::InvalidConfig { field, reason } => {
                    Error::invalid_config(format!("at_symbol.{field}"), reason)
                }
                other => other,
            })
    }

    /// Build the repair chain described by this configuration
    pub fn chain(&self) -> Result<RepairChain> {
        let mut chain = RepairChain::new();
        if self.at_symbol.enabled {
            chain.push(self.protector()?);
        } else {
            tracing::debug!("At-symbol protection disabled");
        }
        Ok(chain)
    }
}
