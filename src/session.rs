//! Suggestion session
//!
//! Holds the suggestion list from the most recent successful lookup and
//! answers prefix queries against it until the user accepts a command line.

use std::sync::{Arc, PoisonError, RwLock};

/// Candidate commands shared between the feedback and prediction paths
///
/// The list is replaced as a whole: writers swap in a new `Arc`, readers
/// clone the current one, so a query never sees a half-written list.
#[derive(Debug, Default)]
pub struct SuggestionSession {
    candidates: RwLock<Option<Arc<[String]>>>,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored candidates
    pub fn record_suggestions(&self, list: Vec<String>) {
        let next: Option<Arc<[String]>> = if list.is_empty() {
            None
        } else {
            Some(list.into())
        };
        log::debug!(
            "Recording {} suggestion(s)",
            next.as_ref().map_or(0, |l| l.len())
        );
        *self.candidates.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Candidates starting with `prefix`, ignoring case, in stored order
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        let Some(candidates) = self.snapshot() else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|candidate| starts_with_ignore_case(candidate, prefix))
            .cloned()
            .collect()
    }

    /// Forget all candidates
    pub fn clear(&self) {
        *self.candidates.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_none()
    }

    fn snapshot(&self) -> Option<Arc<[String]>> {
        self.candidates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text_chars.next() == Some(p))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
