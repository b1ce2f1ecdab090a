//! Command-not-found feedback and predictive suggestions for shells
//!
//! Runs the distribution's command-not-found utility for a failed command,
//! parses its output into an explanation plus install actions, and keeps
//! the resulting commands around for prefix completion until the user
//! submits their next command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod parser;
pub mod provider;
pub mod runner;
pub mod session;
pub mod target;
pub mod utility;


pub use config::Config;
pub use error::CnfError;
pub use feedback::{FeedbackItem, FeedbackLayout};
pub use parser::{ParseResult, parse_output};
pub use provider::{CommandNotFound, PROVIDER_INFO, PredictorEvent, ProviderInfo};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
pub use session::SuggestionSession;
