//! Line classification for command-not-found output
//!
//! The utility writes three line shapes to stderr:
//! ```text
//! Command 'cargo' not found, but can be installed with:
//! sudo snap install rustup  # version 1.28.2, or
//! sudo apt  install cargo   # version 1.75.0+dfsg0ubuntu1-0ubuntu7.1
//!   command 'dir' from deb coreutils (9.4-3ubuntu6.1)
//! ```
//! Each line is classified on its own, in a fixed priority order.

const ACTION_PREFIX: &str = "sudo ";
const CANDIDATE_INDENT: &str = "  ";
const COMMENT_MARKER: char = '#';
const PADDED_APT_INSTALL: &str = "apt  install";
const APT_INSTALL: &str = "apt install";
const SNAP_INSTALL: &str = "snap install ";
const DEB_MARKER: &str = " deb ";
const SNAP_MARKER: &str = " snap ";

/// Shape of a single output line, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Remediation command starting with `sudo `
    Action(&'a str),
    /// Indented line naming a package that provides a similar command
    Candidate(&'a str),
    /// Anything else with visible content (header or footer)
    Text(&'a str),
    /// Empty or whitespace-only
    Blank,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if line.starts_with(ACTION_PREFIX) {
        LineKind::Action(line)
    } else if line.starts_with(CANDIDATE_INDENT) {
        LineKind::Candidate(line)
    } else {
        LineKind::Text(line.trim())
    }
}

/// A normalized action line plus the package it installs from snap, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub text: String,
    pub snap_package: Option<String>,
}

/// Strip the version comment and collapse the column padding in `apt  install`
pub fn normalize_action(line: &str) -> Action {
    let without_comment = match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };
    let text = without_comment.trim().replace(PADDED_APT_INSTALL, APT_INSTALL);

    let snap_package = text
        .strip_prefix(ACTION_PREFIX)
        .and_then(|rest| rest.strip_prefix(SNAP_INSTALL))
        .and_then(first_token)
        .map(str::to_string);

    Action { text, snap_package }
}

/// Where a candidate package comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSource {
    Deb,
    Snap,
}

/// A package named on an indented candidate line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub source: PackageSource,
    pub package: String,
}

impl Candidate {
    /// Directly executable commands for this package
    pub fn suggestions(&self) -> Vec<String> {
        match self.source {
            PackageSource::Deb => vec![format!("sudo apt install {}", self.package)],
            PackageSource::Snap => vec![
                format!("snap info {}", self.package),
                format!("sudo snap install {}", self.package),
            ],
        }
    }
}

/// Extract the package from a candidate line, `None` when it names neither source
///
/// The first marker found decides the source (deb before snap). If no
/// package name follows that marker the line is ignored; later markers are
/// not consulted.
pub fn parse_candidate(line: &str) -> Option<Candidate> {
    let (source, package) = if let Some(rest) = after_marker(line, DEB_MARKER) {
        (PackageSource::Deb, first_token(rest)?)
    } else {
        (PackageSource::Snap, first_token(after_marker(line, SNAP_MARKER)?)?)
    };

    Some(Candidate {
        text: line.trim().to_string(),
        source,
        package: package.to_string(),
    })
}

fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|pos| &line[pos + marker.len()..])
}

fn first_token(s: &str) -> Option<&str> {
    let token = s.split(' ').next().unwrap_or_default();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod line_tests;
