//! Repository URL validation.
//!
//! Only plain GitHub HTTP(S) URLs are accepted: `http(s)://github.com/<owner>/<repo>`
//! with an optional `.git` suffix. SSH remotes, other hosts, nested paths,
//! trailing slashes and query strings are all rejected before anything touches
//! the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/[\w-]+/[\w.-]+(?:\.git)?$")
        .expect("GitHub URL pattern is valid")
});

/// Returns true if `url` is a GitHub repository URL this tool can clone.
pub fn is_valid_github_url(url: &str) -> bool {
    GITHUB_URL.is_match(url)
}

/// Like [`is_valid_github_url`], but produces an [`Error::InvalidUrl`] that
/// tells the user which shape is expected.
pub fn validate_github_url(url: &str) -> Result<()> {
    if is_valid_github_url(url) {
        Ok(())
    } else {
        Err(Error::InvalidUrl {
            url: url.to_string(),
        })
    }
}

/// Repository name derived from the last path segment of the URL.
///
/// A single trailing `.git` is stripped; dots inside the name are kept, so
/// `https://github.com/foo/foo.github.io.git` yields `foo.github.io`.
pub fn repository_name(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last)
}
