use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ev::{ConfidenceEntry, ConfidenceTable, EvEngineConfig};
use crate::rarity::{RarityHierarchy, DEFAULT_RARITY_HIERARCHY};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const CONFIG_PATH_ENV: &str = "TRADEUP_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rarity: RarityConfig,
    #[serde(default)]
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RarityConfig {
    pub hierarchy: Vec<String>,
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            hierarchy: DEFAULT_RARITY_HIERARCHY
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub default_confidence_level: f64,
    pub confidence_levels: Vec<ConfidenceEntry>,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_confidence_level: 0.95,
            confidence_levels: ConfidenceTable::default().entries().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load `config/default.toml`, or the file named by `TRADEUP_CONFIG`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to load {}", config_path.display()))
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rarity_hierarchy()
            .context("rarity.hierarchy is invalid")?;

        let table = self
            .confidence_table()
            .context("valuation.confidence_levels is invalid")?;
        if table.z_score(self.valuation.default_confidence_level).is_err() {
            bail!(
                "valuation.default_confidence_level {} is not in valuation.confidence_levels",
                self.valuation.default_confidence_level
            );
        }
        Ok(())
    }

    pub fn rarity_hierarchy(&self) -> Result<RarityHierarchy> {
        Ok(RarityHierarchy::new(self.rarity.hierarchy.clone())?)
    }

    pub fn confidence_table(&self) -> Result<ConfidenceTable> {
        Ok(ConfidenceTable::new(self.valuation.confidence_levels.clone())?)
    }

    pub fn engine_config(&self) -> Result<EvEngineConfig> {
        Ok(EvEngineConfig {
            confidence: self.confidence_table()?,
        })
    }
}
