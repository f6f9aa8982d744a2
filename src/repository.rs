//! # Repository Fetching
//!
//! This module provides the `RepositoryFetcher`, which turns a repository URL
//! into a local checkout inside a caller-provided directory.
//!
//! ## Design
//!
//! The fetcher depends only on a "clone(url, destination)" operation, expressed
//! by the **`GitOperations`** trait. In the application `DefaultGitOperations`
//! is used, which shells out to the system `git` command. Tests swap in their
//! own implementation to simulate successful or failing clones without
//! touching the network.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::validate::{repository_name, validate_github_url};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones the repository at `url` into `target_dir`.
    ///
    /// Failures must be reported as [`crate::error::Error::Fetch`] with the
    /// classified [`crate::error::FetchFailure`] when the clone itself failed.
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_shallow(url, target_dir)
    }
}

/// A repository materialized on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    /// The validated URL the repository was cloned from.
    pub url: String,
    /// Repository name, without any `.git` suffix.
    pub name: String,
    /// Local checkout directory.
    pub path: PathBuf,
}

/// Validates URLs and clones them through a [`GitOperations`] implementation.
pub struct RepositoryFetcher {
    git_ops: Box<dyn GitOperations>,
}

impl RepositoryFetcher {
    /// Creates a fetcher that uses the system `git` command.
    pub fn new() -> Self {
        Self {
            git_ops: Box::new(DefaultGitOperations),
        }
    }

    /// Creates a fetcher with a custom `GitOperations` implementation.
    pub fn with_operations(git_ops: Box<dyn GitOperations>) -> Self {
        Self { git_ops }
    }

    /// Path a repository would be cloned to inside `temp_dir`.
    pub fn clone_path(url: &str, temp_dir: &Path) -> PathBuf {
        temp_dir.join(repository_name(url))
    }

    /// Clones `url` into `<temp_dir>/<repository-name>`.
    ///
    /// The URL is validated first, so a malformed URL fails with
    /// [`crate::error::Error::InvalidUrl`] before git is ever invoked.
    pub fn fetch(&self, url: &str, temp_dir: &Path) -> Result<RepositoryLocation> {
        validate_github_url(url)?;

        let path = Self::clone_path(url, temp_dir);
        info!("Cloning {} into {}", url, path.display());

        self.git_ops.clone_repository(url, &path)?;

        Ok(RepositoryLocation {
            url: url.to_string(),
            name: repository_name(url).to_string(),
            path,
        })
    }
}

impl Default for RepositoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}
