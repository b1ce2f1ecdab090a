use thiserror::Error;

/// Reasons a command-not-found lookup produced no feedback
///
/// None of these reach the end user. The feedback boundary logs them and
/// reports "no feedback" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnfError {
    #[error("command-not-found utility is not installed at any configured path")]
    UtilityNotFound,

    #[error("failed to launch {program}: {reason}")]
    LaunchFailed { program: String, reason: String },

    #[error("failed to read utility output: {0}")]
    OutputReadFailed(String),

    #[error("utility run was cancelled")]
    Cancelled,

    #[error("utility output had no header or no install actions")]
    ParseAmbiguous,

    #[error("command-not-found feedback is not supported on this platform")]
    UnsupportedPlatform,

    #[error("target is not a bare command: {0:?}")]
    TargetNotApplicable(String),

    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
