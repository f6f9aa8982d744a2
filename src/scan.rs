//! # Source Scanning
//!
//! Walks a checked-out repository and groups every file that passes the
//! [`FilterConfig`] by its immediate parent directory.
//!
//! The whole tree is walked before anything is merged. Entries inside a
//! directory are visited in file-name order, so scanning an unchanged tree
//! twice produces identical groups in identical order.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::FilterConfig;
use crate::error::Result;

/// Matched files that share an immediate parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    /// Absolute path of the directory.
    pub dir: PathBuf,
    /// Files directly beneath `dir`, in traversal order.
    pub files: Vec<PathBuf>,
}

/// Insertion-ordered mapping from directory to [`FileGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileGroups {
    groups: Vec<FileGroup>,
    index: HashMap<PathBuf, usize>,
}

impl FileGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `file` to the group of its parent directory, creating the group
    /// on first use.
    pub fn push(&mut self, file: PathBuf) {
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        match self.index.get(&dir) {
            Some(&i) => self.groups[i].files.push(file),
            None => {
                self.index.insert(dir.clone(), self.groups.len());
                self.groups.push(FileGroup {
                    dir,
                    files: vec![file],
                });
            }
        }
    }

    /// Group for `dir`, if any file was matched directly beneath it.
    pub fn get(&self, dir: &Path) -> Option<&FileGroup> {
        self.index.get(dir).map(|&i| &self.groups[i])
    }

    /// Groups in the order their directories were first encountered.
    pub fn iter(&self) -> std::slice::Iter<'_, FileGroup> {
        self.groups.iter()
    }

    /// Number of groups (distinct directories).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }
}

impl<'a> IntoIterator for &'a FileGroups {
    type Item = &'a FileGroup;
    type IntoIter = std::slice::Iter<'a, FileGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Recursively collect the files under `root` that pass every filter in
/// `config`, grouped by parent directory.
///
/// Symbolic links are not followed and only regular files are collected. A
/// directory that cannot be read aborts the scan.
pub fn scan_sources(root: &Path, config: &FilterConfig) -> Result<FileGroups> {
    info!("Scanning {}", root.display());
    let mut groups = FileGroups::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Always allow the root directory (depth 0) to be processed
            if e.depth() == 0 {
                return true;
            }
            !config.is_excluded(relative_to(e.path(), root))
        });

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        let relative = relative_to(path, root);

        if !config.is_included(relative) {
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        if !config.has_allowed_extension(path) {
            continue;
        }

        if config.is_blacklisted(path) {
            debug!("Skipping blacklisted file {}", relative.display());
            continue;
        }

        groups.push(path.to_path_buf());
    }

    info!(
        "Found {} files in {} folders",
        groups.file_count(),
        groups.len()
    );
    Ok(groups)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
