//! Command-not-found feedback provider
//!
//! One [`CommandNotFound`] lives for the whole shell session. The host calls
//! [`CommandNotFound::request_feedback`] after a command-not-found failure,
//! then [`CommandNotFound::predictions`] as the user types, and finally
//! [`CommandNotFound::command_line_accepted`] when a line is submitted.

use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::CnfError;
use crate::feedback::FeedbackItem;
use crate::parser::parse_output;
use crate::runner::{ProcessRunner, SystemRunner};
use crate::session::SuggestionSession;
use crate::target::check_target;
use crate::utility::UtilityLocator;

/// Identity used when registering with a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PROVIDER_INFO: ProviderInfo = ProviderInfo {
    id: "47013747-CB9D-4EBC-9F02-F32B8AB19D48",
    name: "cmd-not-found",
    description: "The built-in feedback/prediction source for the Linux command utility.",
};

/// Notifications a host may send to a predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorEvent {
    CommandLineAccepted,
    CommandLineExecuted,
    SuggestionDisplayed,
    SuggestionAccepted,
}

pub struct CommandNotFound {
    config: Config,
    locator: UtilityLocator,
    runner: Box<dyn ProcessRunner>,
    session: SuggestionSession,
}

impl fmt::Debug for CommandNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNotFound")
            .field("config", &self.config)
            .field("locator", &self.locator)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl CommandNotFound {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }

    pub fn with_runner(config: Config, runner: impl ProcessRunner + 'static) -> Self {
        let locator = UtilityLocator::new(config.utility.paths.clone());
        Self {
            config,
            locator,
            runner: Box::new(runner),
            session: SuggestionSession::new(),
        }
    }

    pub fn info(&self) -> &'static ProviderInfo {
        &PROVIDER_INFO
    }

    pub fn session(&self) -> &SuggestionSession {
        &self.session
    }

    /// Feedback for a command that was not found, or `None`
    ///
    /// Never fails: a missing utility, a launch error, cancellation or
    /// unusable output all end up as `None`. On success the suggestion
    /// list replaces whatever the session held.
    pub fn request_feedback(
        &self,
        target: &str,
        platform_is_supported: bool,
        cancel_token: &CancellationToken,
    ) -> Option<FeedbackItem> {
        match self.lookup(target, platform_is_supported, cancel_token) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("No feedback for {:?}: {}", target, e);
                None
            }
        }
    }

    fn lookup(
        &self,
        target: &str,
        platform_is_supported: bool,
        cancel_token: &CancellationToken,
    ) -> Result<FeedbackItem, CnfError> {
        if !platform_is_supported {
            return Err(CnfError::UnsupportedPlatform);
        }
        let name = check_target(target, &self.config.target.script_extensions)?;
        let utility = self.locator.locate().ok_or(CnfError::UtilityNotFound)?;

        let args = self.config.utility.arguments(name);
        let output = self.runner.run(utility, &args, cancel_token)?;
        log::debug!(
            "{} exited with {:?}",
            utility.display(),
            output.exit_code
        );

        let (item, suggestions) =
            parse_output(output.stderr_lines(), Some(&output.stdout)).into_feedback()?;

        if cancel_token.is_cancelled() {
            return Err(CnfError::Cancelled);
        }
        self.session.record_suggestions(suggestions);
        Ok(item)
    }

    /// Stored suggestions matching what the user has typed so far
    pub fn predictions(&self, input: &str) -> Vec<String> {
        self.session.matches(input)
    }

    /// The user submitted a command line; stale suggestions must go
    pub fn command_line_accepted(&self) {
        self.session.clear();
    }

    /// Whether this provider wants to hear about `event`
    pub fn accepts(&self, event: PredictorEvent) -> bool {
        matches!(event, PredictorEvent::CommandLineAccepted)
    }

    pub fn notify(&self, event: PredictorEvent) {
        match event {
            PredictorEvent::CommandLineAccepted => self.command_line_accepted(),
            PredictorEvent::CommandLineExecuted
            | PredictorEvent::SuggestionDisplayed
            | PredictorEvent::SuggestionAccepted => {}
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
