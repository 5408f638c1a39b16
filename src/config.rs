//! Run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Run configuration loaded from a YAML file.
///
/// Lists which categories to compile from each catalog and where the
/// rule-set files go.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Output directory for rule-set files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Domain categories to compile (attribute forms like `cn@ads` allowed)
    #[serde(default)]
    pub geosite: Vec<String>,
    /// IP categories to compile
    #[serde(default)]
    pub geoip: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
