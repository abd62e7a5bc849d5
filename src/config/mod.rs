use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;

const CONFIG_DIR: &str = "orcamento";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Operator preferences persisted between sessions.
///
/// Budgets themselves are session-only by design; the config covers the
/// ambient knobs around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the exported document is written to. Current directory
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Currency symbol used by the CLI listings.
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: None,
            currency_symbol: Self::default_currency_symbol(),
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "R$".into()
    }
}

/// Loads and saves the config file under the platform config directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_base(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, falling back to defaults when the file is missing.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the config through a temporary file and rename.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn base_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension(format!("json.{}", TMP_SUFFIX))
}
