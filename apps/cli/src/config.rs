//! # Configuration
//!
//! Start-up defaults for the bill state and display settings.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIP50_*`)
//! 2. Config file (`--config`, `TIP50_CONFIG`, or the platform config dir)
//! 3. Defaults (this file)
//!
//! ## Example `config.toml`
//! ```toml
//! currency_symbol = "€"
//! default_tip_percentage = 15.0
//! round_to_nearest = true
//! default_split = "2"
//! ```
//!
//! Configuration is read-only after loading.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tip_core::validation::parse_tip_percentage;
use tip_core::{BillState, Money, DEFAULT_TIP_PERCENTAGE, MAX_TIP_PERCENTAGE};

use crate::commands::pick_split;
use crate::error::{CliError, CliResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TIP50_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Tip percentage preselected when no `--tip` is given
    pub default_tip_percentage: f64,

    /// Whether rounding starts switched on
    pub round_to_nearest: bool,

    /// Split picker tag preselected when no `--split` is given ("1".."6" or "Other")
    pub default_split: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Currency: $
    /// - Tip: 20%
    /// - Rounding: off
    /// - Split: 1 person
    fn default() -> Self {
        AppConfig {
            currency_symbol: "$".to_string(),
            default_tip_percentage: DEFAULT_TIP_PERCENTAGE,
            round_to_nearest: false,
            default_split: "1".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file (if any) and environment.
    ///
    /// An explicit path must exist. The platform default path is only used
    /// when a file is actually there.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(|| Self::default_path().filter(|p| p.is_file()));

        let mut config = match &path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file found, using defaults");
                AppConfig::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        info!(
            path = ?path,
            tip = config.default_tip_percentage,
            round = config.round_to_nearest,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parses TOML config text. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Platform config file location (`<config dir>/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tip50", "tip50").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Applies `TIP50_*` overrides using the given lookup.
    ///
    /// ## Environment Variables
    /// - `TIP50_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TIP50_TIP_PERCENTAGE`: Override default tip (e.g., "18" or "18%")
    /// - `TIP50_ROUND`: "true"/"1" to start with rounding on
    /// - `TIP50_SPLIT`: Override default split tag
    ///
    /// Unusable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("TIP50_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("TIP50_TIP_PERCENTAGE") {
            match parse_tip_percentage(&raw) {
                Ok(pct) => self.default_tip_percentage = pct,
                Err(e) => warn!("Ignoring TIP50_TIP_PERCENTAGE: {}", e),
            }
        }

        if let Some(raw) = lookup("TIP50_ROUND") {
            self.round_to_nearest = raw.eq_ignore_ascii_case("true") || raw == "1";
        }

        if let Some(split) = lookup("TIP50_SPLIT") {
            self.default_split = split;
        }
    }

    /// Checks values a config file could get wrong.
    pub fn validate(&self) -> CliResult<()> {
        let tip = self.default_tip_percentage;
        if !tip.is_finite() || !(0.0..=MAX_TIP_PERCENTAGE).contains(&tip) {
            return Err(CliError::config(format!(
                "default_tip_percentage must be between 0 and {}, got {}",
                MAX_TIP_PERCENTAGE, tip
            )));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(CliError::config("currency_symbol cannot be empty"));
        }

        Ok(())
    }

    /// The bill state a fresh session starts from.
    pub fn initial_state(&self) -> BillState {
        BillState::new(0.0, self.default_tip_percentage)
            .with_rounding(self.round_to_nearest)
            .with_split(pick_split(&self.default_split, ""))
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tip_cli::config::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(12.34), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        Money::from_amount(amount).format_with_symbol(&self.currency_symbol)
    }
}
