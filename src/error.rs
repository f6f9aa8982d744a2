//! # Error Handling
//!
//! This module defines the centralized error type for `sew-source`. It uses
//! `thiserror` to describe every failure that can end a run, with enough
//! context to produce a useful message for the user.
//!
//! ## Taxonomy
//!
//! - **Invalid input** (`InvalidUrl`): the repository URL is malformed. This is
//!   detected before any I/O happens.
//! - **Fetch failure** (`Fetch`): `git clone` failed. The git diagnostic text is
//!   classified into a [`FetchFailure`] by [`crate::git::classify_clone_error`].
//! - **Scan/merge failure** (`Walk`, `OutputWrite`, `Io`): the tree could not
//!   be traversed or an artifact could not be written.
//!
//! Per-file read failures during merging are deliberately *not* represented
//! here. They are recovered where they occur and reported through
//! [`crate::merge::MergeReport`].

use std::path::PathBuf;

use thiserror::Error;

/// Classified reason for a failed clone.
///
/// The classification is a best-effort heuristic over the free-text
/// diagnostics that `git` prints. It is not guaranteed to be accurate: git may
/// change its wording between versions, and GitHub answers anonymous requests
/// for missing repositories with an authentication challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The remote asked for credentials that were not available.
    AuthRequired,
    /// The remote reported that the repository does not exist.
    NotFound,
    /// Anything else.
    Unknown,
}

impl FetchFailure {
    /// User-facing description of the failure.
    pub fn message(&self) -> &'static str {
        match self {
            FetchFailure::AuthRequired => {
                "Repository is private. Please check the URL or your access permissions."
            }
            FetchFailure::NotFound => "Repository does not exist. Please check the URL.",
            FetchFailure::Unknown => "Repository is either private or does not exist.",
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Main error type for sew-source operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository URL does not have the shape
    /// `http(s)://github.com/<owner>/<repo>[.git]`.
    #[error("Invalid GitHub URL format: {url}. Expected format: https://github.com/username/repository")]
    InvalidUrl { url: String },

    /// `git clone` ran and failed.
    #[error("{kind}")]
    Fetch {
        url: String,
        kind: FetchFailure,
        /// Raw stderr from git, kept for debug logging.
        stderr: String,
    },

    /// The `git` executable could not be started.
    #[error("Git command failed: {command} - {message}")]
    GitCommand { command: String, message: String },

    /// The filter configuration file is invalid.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A directory could not be traversed while scanning.
    #[error("Failed to scan repository: {0}")]
    Walk(#[from] walkdir::Error),

    /// An output directory or artifact could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
