// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::utility::DEFAULT_UTILITY_PATHS;

const NO_FAILURE_MSG_FLAG: &str = "--no-failure-msg";

/// Utility lookup and invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UtilityConfig {
    /// Candidate executables, first usable one wins
    pub paths: Vec<PathBuf>,
    /// Pass `--no-failure-msg` ahead of the command name
    pub no_failure_msg: bool,
}

impl Default for UtilityConfig {
    fn default() -> Self {
        UtilityConfig {
            paths: DEFAULT_UTILITY_PATHS.iter().map(PathBuf::from).collect(),
            no_failure_msg: true,
        }
    }
}

impl UtilityConfig {
    /// Argument list for looking up `target`
    pub fn arguments<'a>(&self, target: &'a str) -> Vec<&'a str> {
        if self.no_failure_msg {
            vec![NO_FAILURE_MSG_FLAG, target]
        } else {
            vec![target]
        }
    }
}

/// Which failed commands are worth looking up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Extensions that mark the target as a script, compared ignoring case
    pub script_extensions: Vec<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            script_extensions: vec!["ps1".to_string()],
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub utility: UtilityConfig,
    #[serde(default)]
    pub target: TargetConfig,
}
