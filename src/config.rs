//! Configuration loading
//!
//! Reads `~/.config/cnf/config.toml`. A missing file means defaults; a
//! broken one means defaults plus a warning for the caller to report.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, TargetConfig, UtilityConfig};

use crate::error::CnfError;

const CONFIG_DIR: &str = "cnf";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem found while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Ignoring {}: {}", path.display(), e)),
        },
    }
}

pub fn parse_config(content: &str) -> Result<Config, CnfError> {
    toml::from_str(content).map_err(|e| CnfError::Config(e.message().to_string()))
}
