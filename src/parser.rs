//! Parser for command-not-found diagnostic output
//!
//! Turns the utility's stderr into a [`ParseResult`] in a single forward
//! pass. Lines are classified by [`line::classify`]; see that module for the
//! recognised shapes.

pub mod line;

use serde::Serialize;

use crate::error::CnfError;
use crate::feedback::FeedbackItem;
use line::{LineKind, classify, normalize_action, parse_candidate};

/// Everything extracted from one utility run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Last plain line seen before the first action
    pub header: Option<String>,
    /// Display-ready remediation lines, in output order
    pub actions: Vec<String>,
    /// Last plain line seen after the first action, or the utility's stdout
    pub footer: Option<String>,
    /// Directly executable commands for predictive completion
    pub suggestions: Vec<String>,
}

impl ParseResult {
    /// A result is usable only with both a header and at least one action
    pub fn is_present(&self) -> bool {
        self.header.as_deref().is_some_and(|h| !h.is_empty()) && !self.actions.is_empty()
    }

    /// Split into the displayed feedback and the suggestion list
    pub fn into_feedback(self) -> Result<(FeedbackItem, Vec<String>), CnfError> {
        if !self.is_present() {
            return Err(CnfError::ParseAmbiguous);
        }
        let header = self.header.unwrap_or_default();
        let item = FeedbackItem::new(header, self.actions, self.footer);
        Ok((item, self.suggestions))
    }
}

/// Line-at-a-time parser state
#[derive(Debug, Default)]
pub struct OutputParser {
    header: Option<String>,
    actions: Vec<String>,
    footer: Option<String>,
    suggestions: Vec<String>,
    // Without a candidate line the suggestions are exactly the actions;
    // `snap info` hints from action lines only survive alongside candidates
    saw_candidate: bool,
}

impl OutputParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, raw: &str) {
        match classify(raw) {
            LineKind::Blank => {}
            LineKind::Action(line) => {
                let action = normalize_action(line);
                if let Some(package) = action.snap_package {
                    self.suggestions.push(format!("snap info {}", package));
                }
                self.actions.push(action.text);
            }
            LineKind::Candidate(line) => {
                if let Some(candidate) = parse_candidate(line) {
                    self.suggestions.extend(candidate.suggestions());
                    self.saw_candidate = true;
                    self.actions.push(candidate.text);
                }
            }
            LineKind::Text(text) => {
                let slot = if self.actions.is_empty() {
                    &mut self.header
                } else {
                    &mut self.footer
                };
                *slot = Some(text.to_string());
            }
        }
    }

    /// Finish the pass
    ///
    /// `stdout` supplies the footer when the stderr pass found none.
    pub fn finish(self, stdout: Option<&str>) -> ParseResult {
        let footer = self.footer.or_else(|| {
            stdout
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        });

        let mut result = ParseResult {
            header: self.header,
            actions: self.actions,
            footer,
            suggestions: self.suggestions,
        };

        if result.is_present() && !self.saw_candidate {
            result.suggestions = result.actions.clone();
        }

        result
    }
}

/// Parse the utility's stderr lines, with its stdout as the fallback footer
pub fn parse_output<I, S>(lines: I, stdout: Option<&str>) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = OutputParser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish(stdout)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
