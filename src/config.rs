//! # Merge Filter Configuration
//!
//! This module defines [`FilterConfig`], the immutable set of rules that
//! decides which files of a cloned repository are merged, and the logic for
//! loading it from an optional YAML file.
//!
//! ## Filters
//!
//! A file is merged only if it passes all four filters independently:
//!
//! 1. **Excluded directories**: no component of its path (relative to the
//!    repository root) equals an excluded name.
//! 2. **Included directories**: if any are configured, at least one of them is
//!    a substring of its relative path.
//! 3. **Extensions**: its extension is in the allow-list. `md` and `.md` are
//!    treated the same; the comparison is otherwise case-sensitive.
//! 4. **Blacklist**: its lowercase filename is not blacklisted. Blacklist
//!    entries are compared case-insensitively.
//!
//! ## File Format
//!
//! ```yaml
//! include_dirs: [docs]
//! exclude_dirs: [node_modules]
//! blacklist: [CHANGELOG.md]
//! extensions: [.md, .mdx]
//! output_extension: txt
//! ```
//!
//! Every key is optional. Values given on the command line are layered on top
//! with [`FilterConfig::with_overrides`].

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Rules applied while scanning a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Substrings of which at least one must appear in a file's relative path.
    /// Empty means every directory is included.
    pub include_dirs: Vec<String>,
    /// Directory names that are skipped wherever they appear.
    pub exclude_dirs: Vec<String>,
    /// Filenames that are never merged (case-insensitive).
    pub blacklist: Vec<String>,
    /// Allowed file extensions, e.g. `.md`.
    pub extensions: Vec<String>,
    /// Extension of the written artifacts, without the leading dot.
    pub output_extension: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_dirs: Vec::new(),
            exclude_dirs: defaults::default_exclude_dirs(),
            blacklist: Vec::new(),
            extensions: defaults::default_extensions(),
            output_extension: defaults::default_output_extension(),
        }
    }
}

/// Values supplied on the command line.
///
/// List values extend the configured lists, except `extensions`, which
/// replaces the allow-list when non-empty.
#[derive(Debug, Clone, Default)]
pub struct FilterOverrides {
    pub include_dirs: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub blacklist: Vec<String>,
    pub extensions: Vec<String>,
    pub output_extension: Option<String>,
}

impl FilterConfig {
    /// Layer command-line values on top of this configuration.
    pub fn with_overrides(mut self, overrides: FilterOverrides) -> Self {
        extend_unique(&mut self.include_dirs, overrides.include_dirs);
        extend_unique(&mut self.exclude_dirs, overrides.exclude_dirs);
        extend_unique(&mut self.blacklist, overrides.blacklist);

        if !overrides.extensions.is_empty() {
            self.extensions.clear();
            extend_unique(&mut self.extensions, overrides.extensions);
        }

        if let Some(ext) = overrides.output_extension {
            self.output_extension = ext;
        }

        self.normalized()
    }

    /// Canonical form: extensions carry a leading dot, the output extension
    /// does not.
    fn normalized(mut self) -> Self {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .filter(|ext| ext.len() > 1)
            .collect();
        self.output_extension = self
            .output_extension
            .trim()
            .trim_start_matches('.')
            .to_string();
        self
    }

    /// Check that the configuration can produce any output at all.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::ConfigParse {
                message: "No file extensions configured".to_string(),
                hint: Some("Pass -e/--extensions, e.g. '-e .md'".to_string()),
            });
        }

        if self.output_extension.is_empty()
            || self.output_extension.contains(['/', '\\'])
        {
            return Err(Error::ConfigParse {
                message: format!("Invalid output extension '{}'", self.output_extension),
                hint: Some("Use a plain extension such as 'txt' or 'md'".to_string()),
            });
        }

        Ok(())
    }

    /// True if any component of `relative` is an excluded directory name.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        relative.components().any(|component| match component {
            Component::Normal(name) => self
                .exclude_dirs
                .iter()
                .any(|excluded| name.to_str() == Some(excluded.as_str())),
            _ => false,
        })
    }

    /// True if no include filters are set or one of them occurs in `relative`.
    pub fn is_included(&self, relative: &Path) -> bool {
        if self.include_dirs.is_empty() {
            return true;
        }
        let relative = relative.to_string_lossy();
        self.include_dirs
            .iter()
            .any(|include| relative.contains(include.as_str()))
    }

    /// True if the extension of `path` is in the allow-list.
    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let suffix = format!(".{}", ext);
        self.extensions
            .iter()
            .any(|allowed| normalize_extension(allowed) == suffix)
    }

    /// True if the filename of `path` is blacklisted.
    pub fn is_blacklisted(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.blacklist
            .iter()
            .any(|entry| entry.to_lowercase() == name)
    }
}

/// `md`, `.md` and ` .md ` all become `.md`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn extend_unique(target: &mut Vec<String>, values: Vec<String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

/// Parse a filter configuration from YAML. An empty document yields the
/// defaults.
pub fn parse(yaml_content: &str) -> Result<FilterConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(FilterConfig::default());
    }
    let config: FilterConfig = serde_yaml::from_str(yaml_content)?;
    Ok(config.normalized())
}

/// Load a filter configuration from a YAML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FilterConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
