use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::{HumanError, Result};
use crate::size::Units;

/// How `human number` renders by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Thousands separators (`1,000,000`)
    #[default]
    Group,
    /// Scale words (`1 million`)
    Words,
}

/// User-configurable defaults for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanConfig {
    /// Unit system for `human size` (default: iec)
    #[serde(default)]
    pub units: Units,

    /// Style for `human number` (default: group)
    #[serde(default)]
    pub number_style: NumberStyle,

    /// Log filter used when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for HumanConfig {
    fn default() -> Self {
        Self {
            units: Units::default(),
            number_style: NumberStyle::default(),
            log_level: default_log_level(),
        }
    }
}

impl HumanConfig {
    /// Load configuration from `path`, or from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(dirs::config_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            HumanError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: HumanConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The file `load(None)` reads.
    pub fn default_path() -> PathBuf {
        dirs::config_path()
    }
}
