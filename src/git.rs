//! Thin wrapper around the system `git` executable.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, FetchFailure, Result};

/// Clone `url` into `target_dir` using a shallow clone.
///
/// This uses the system git command, which automatically handles SSH keys,
/// credential helpers and anything configured in `~/.gitconfig`. Terminal
/// prompts are disabled so a private repository fails instead of waiting for
/// a username on stdin.
pub fn clone_shallow(url: &str, target_dir: &Path) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("git clone --depth=1 {} {}", url, target_dir.display());

    let output = Command::new("git")
        .args(["clone", "--depth=1", "--quiet", url])
        .arg(target_dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::GitCommand {
            command: "clone".to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!("git clone exited with {}: {}", output.status, stderr.trim());

        return Err(Error::Fetch {
            url: url.to_string(),
            kind: classify_clone_error(&stderr),
            stderr,
        });
    }

    Ok(())
}

/// Map git's diagnostic text for a failed clone to a [`FetchFailure`].
///
/// This is a substring heuristic and therefore fragile: it depends on the
/// wording of the installed git version and of the remote. Keep every rule in
/// this one function so it can be hardened without touching callers.
pub fn classify_clone_error(stderr: &str) -> FetchFailure {
    if stderr.contains("Authentication failed") || stderr.contains("could not read Username") {
        return FetchFailure::AuthRequired;
    }

    if stderr.to_lowercase().contains("not found") {
        return FetchFailure::NotFound;
    }

    FetchFailure::Unknown
}
