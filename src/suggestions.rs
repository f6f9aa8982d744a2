//! # Error Suggestions
//!
//! Errors should tell users what went wrong AND how to fix it. This module
//! maps library errors to `hint:` lines the CLI prints below the message.

use crate::error::{Error, FetchFailure};

/// Hints for `error`, if there is anything useful to add.
pub fn hints(error: &Error) -> Vec<&'static str> {
    match error {
        Error::InvalidUrl { .. } => vec![
            "Use the HTTPS form shown on the repository page, e.g. https://github.com/owner/repo",
            "SSH remotes (git@github.com:...) and links to sub-pages are not supported",
        ],
        Error::Fetch { kind, .. } => match kind {
            FetchFailure::AuthRequired => vec![
                "Configure a git credential helper or personal access token for github.com",
                "Check that the repository name is spelled correctly",
            ],
            FetchFailure::NotFound => vec!["Check the owner and repository name in the URL"],
            FetchFailure::Unknown => vec!["Run with --log-level debug to see git's output"],
        },
        Error::GitCommand { .. } => vec!["Make sure git is installed and on your PATH"],
        Error::OutputWrite { .. } => {
            vec!["Use -o/--output-dir to choose a writable output directory"]
        }
        _ => Vec::new(),
    }
}

/// Convert a library error into an `anyhow::Error` whose message ends with
/// the hints from [`hints`].
pub fn with_hints(error: Error) -> anyhow::Error {
    let hints = hints(&error);
    if hints.is_empty() {
        return error.into();
    }
    let mut message = error.to_string();
    message.push('\n');
    for hint in hints {
        message.push_str("\nhint: ");
        message.push_str(hint);
    }
    anyhow::anyhow!(message)
}
