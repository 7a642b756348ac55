use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::rules::RuleSet;
use crate::source::walk::SourceFilter;

/// Tool configuration, read from JSON.
/// Lives at `~/.camel2snake/config.json` unless given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word rules used when converting names
    pub rules: RuleSet,
    /// Which files a directory walk picks up
    pub sources: SourceFilter,
}

impl Config {
    /// Load the default config file when it exists, built-in defaults otherwise.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Ok(path) if path.is_file() => Self::load(&path),
            Ok(path) => {
                tracing::debug!("No config at {}, using built-in rules", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                tracing::debug!("{e:#}, using built-in rules");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.sources.extensions.is_empty() {
            bail!("sources.extensions must list at least one file extension");
        }
        if let Some(ext) = self
            .sources
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            bail!("sources.extensions entries are written without a dot, got '{ext}'");
        }
        Ok(())
    }
}

/// Returns the default config path: `~/.camel2snake/config.json`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".camel2snake").join("config.json"))
}
