//! Deciding whether a failed command is worth looking up

use std::path::Path;

use crate::error::CnfError;

/// Returns the trimmed command name, or why it should not be looked up
///
/// Empty names and script files (by extension) are rejected.
pub fn check_target<'a>(target: &'a str, script_extensions: &[String]) -> Result<&'a str, CnfError> {
    let name = target.trim();
    if name.is_empty() || is_script(name, script_extensions) {
        return Err(CnfError::TargetNotApplicable(target.to_string()));
    }
    Ok(name)
}

fn is_script(name: &str, script_extensions: &[String]) -> bool {
    let Some(extension) = Path::new(name).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    script_extensions
        .iter()
        .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(extension))
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod target_tests;
