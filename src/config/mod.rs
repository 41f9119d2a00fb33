//! @acp:module "Configuration"
//! @acp:summary "Rules and output path configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::RulesError;

/// Default config file name, looked up under the project root
pub const DEFAULT_CONFIG_FILE: &str = ".windsurfrules.config.json";

fn default_rules_dir() -> PathBuf {
    PathBuf::from(".cursor").join("rules")
}

fn default_output() -> PathBuf {
    PathBuf::from(".windsurfrules")
}

/// @acp:summary "Aggregation paths, relative values resolve against the project root"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory whose direct child files are the fragments
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    /// Aggregate file to overwrite
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            output: default_output(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| RulesError::io(path, e))?;
        Ok(())
    }

    /// @acp:summary "Load from a path if it exists, otherwise fall back to defaults"
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Rules directory resolved against `root`
    pub fn rules_path(&self, root: &Path) -> PathBuf {
        root.join(&self.rules_dir)
    }

    /// Output file resolved against `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}
