use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "SHARPSIDE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parlay: ParlayConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Thresholds owned by the analysis engine. Read-only once the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Minimum best-bet confidence for a pick to be listed as a top pick.
    pub confidence_threshold: f64,
    /// Minimum overall confidence for a game to be used as a parlay leg.
    pub parlay_confidence_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 3.0,
            parlay_confidence_threshold: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParlayConfig {
    pub max_parlays: usize,
    /// Placeholder payout quoted for every 2-leg parlay. Not priced from leg odds.
    pub two_leg_odds: String,
    /// Placeholder payout quoted for the 3-leg parlay. Not priced from leg odds.
    pub three_leg_odds: String,
}

impl Default for ParlayConfig {
    fn default() -> Self {
        Self {
            max_parlays: 3,
            two_leg_odds: "+260".to_string(),
            three_leg_odds: "+600".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

impl AppConfig {
    /// Resolve the config path: explicit argument, then `SHARPSIDE_CONFIG`, then the default.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a TOML file after loading `.env` into the environment.
    ///
    /// A missing file at the default location falls back to built-in defaults; a missing
    /// file that was asked for explicitly is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::resolve_path(explicit);
        if explicit.is_none() && !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let engine = &self.engine;
        if !engine.confidence_threshold.is_finite() || !engine.parlay_confidence_threshold.is_finite()
        {
            bail!("engine thresholds must be finite numbers");
        }
        if self.parlay.max_parlays == 0 {
            bail!("parlay.max_parlays must be at least 1");
        }
        Ok(())
    }
}
