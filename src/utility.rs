//! Locating the command-not-found utility

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Where distributions install the utility, in lookup order
pub const DEFAULT_UTILITY_PATHS: [&str; 2] = [
    "/usr/lib/command-not-found",
    "/usr/share/command-not-found/command-not-found",
];

/// Resolves the utility path once and remembers the answer
///
/// A miss is cached as well; the binary is assumed not to appear or vanish
/// while the process runs.
#[derive(Debug)]
pub struct UtilityLocator {
    candidates: Vec<PathBuf>,
    resolved: OnceLock<Option<PathBuf>>,
}

impl Default for UtilityLocator {
    fn default() -> Self {
        Self::new(DEFAULT_UTILITY_PATHS.iter().map(PathBuf::from).collect())
    }
}

impl UtilityLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            resolved: OnceLock::new(),
        }
    }

    pub fn locate(&self) -> Option<&Path> {
        self.resolved
            .get_or_init(|| {
                let found = self
                    .candidates
                    .iter()
                    .find(|path| is_executable_by_others(path))
                    .cloned();
                match &found {
                    Some(path) => log::debug!("Using utility at {}", path.display()),
                    None => log::debug!("No utility found in {:?}", self.candidates),
                }
                found
            })
            .as_deref()
    }
}

/// True for a regular file with the other-execute bit set
#[cfg(unix)]
pub fn is_executable_by_others(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o001 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable_by_others(_path: &Path) -> bool {
    false
}

#[cfg(test)]
#[path = "utility_tests.rs"]
mod utility_tests;
