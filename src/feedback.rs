//! Feedback shown to the user after a command was not found

use serde::Serialize;

/// How the host should lay out the feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackLayout {
    /// Header and actions only
    Compact,
    /// Header, actions and a footer, separated by blank lines
    Portrait,
}

/// Explanation of a missing command and how to fix it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub header: String,
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub layout: FeedbackLayout,
}

impl FeedbackItem {
    /// The layout follows from whether a non-empty footer exists
    pub fn new(header: String, actions: Vec<String>, footer: Option<String>) -> Self {
        let footer = footer.filter(|f| !f.is_empty());
        let layout = if footer.is_some() {
            FeedbackLayout::Portrait
        } else {
            FeedbackLayout::Compact
        };
        Self {
            header,
            actions,
            footer,
            layout,
        }
    }

    /// Plain-text rendering for terminals
    pub fn render(&self) -> String {
        let mut lines = vec![self.header.clone()];
        if self.layout == FeedbackLayout::Portrait {
            lines.push(String::new());
        }
        lines.extend(self.actions.iter().map(|action| format!("  {}", action)));
        if let Some(footer) = &self.footer {
            lines.push(String::new());
            lines.push(footer.clone());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod feedback_tests;
