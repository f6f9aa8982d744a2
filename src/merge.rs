//! # Artifact Writing
//!
//! Serializes each [`FileGroup`] into one text artifact under
//! `<output-dir>/<repository-name>/`.
//!
//! ## Layout
//!
//! Groups are numbered from 1 in mapping order and written to
//! `<index>_<folder-name>.<ext>`. Two folders with the same base name are
//! told apart by the index prefix. Each artifact starts with a folder banner
//! naming the folder (relative to the repository root) and the number of files
//! in the group, followed by a banner and the full text of every file.
//!
//! ## Failures
//!
//! A file that cannot be read or is not valid UTF-8 is logged with `warn!`,
//! recorded in the [`MergeReport`] and left out of its artifact; the rest of
//! the group and all later groups are still written. Failing to create the
//! output directory or to write an artifact aborts the merge.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::scan::{FileGroup, FileGroups};

const FOLDER_RULE_WIDTH: usize = 50;
const FILE_RULE_WIDTH: usize = 80;

/// A source file that was left out of its artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the repository root.
    pub path: PathBuf,
    /// Why the file could not be read.
    pub reason: String,
}

/// Outcome of [`Merger::write_artifacts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Directory the artifacts were written to.
    pub output_root: PathBuf,
    /// Written artifacts, in index order.
    pub artifacts: Vec<PathBuf>,
    /// Files that could not be read.
    pub skipped: Vec<SkippedFile>,
}

/// Writes one artifact per folder.
pub struct Merger {
    output_extension: String,
    progress: ProgressBar,
}

impl Merger {
    /// Creates a merger writing `<index>_<folder>.<output_extension>` files.
    pub fn new(output_extension: impl Into<String>) -> Self {
        Self {
            output_extension: output_extension.into(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Advance `progress` by one for every folder written.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Write every group in `groups` under `<output_dir>/<root-name>/`.
    pub fn write_artifacts(
        &self,
        groups: &FileGroups,
        root: &Path,
        output_dir: &Path,
    ) -> Result<MergeReport> {
        let repo_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output_root = output_dir.join(repo_name);

        fs::create_dir_all(&output_root).map_err(|source| Error::OutputWrite {
            path: output_root.clone(),
            source,
        })?;

        info!(
            "Merging {} files from {} folders into {}",
            groups.file_count(),
            groups.len(),
            output_root.display()
        );

        self.progress.set_length(groups.len() as u64);

        let mut report = MergeReport {
            output_root: output_root.clone(),
            ..Default::default()
        };

        for (i, group) in groups.iter().enumerate() {
            let index = i + 1;
            let content = render_group(group, root, &mut report.skipped);

            let artifact = output_root.join(artifact_name(index, group, &self.output_extension));
            fs::write(&artifact, content).map_err(|source| Error::OutputWrite {
                path: artifact.clone(),
                source,
            })?;

            report.artifacts.push(artifact);
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(report)
    }
}

/// `<index>_<folder-base-name>.<ext>`
fn artifact_name(index: usize, group: &FileGroup, extension: &str) -> String {
    let folder_name = group
        .dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_{}.{}", index, folder_name, extension)
}

fn render_group(group: &FileGroup, root: &Path, skipped: &mut Vec<SkippedFile>) -> String {
    let mut sections = Vec::with_capacity(group.files.len() + 1);
    sections.push(folder_banner(
        &display_relative(&group.dir, root),
        group.files.len(),
    ));

    for (position, file) in group.files.iter().enumerate() {
        let relative = file.strip_prefix(root).unwrap_or(file);
        match fs::read_to_string(file) {
            Ok(content) => {
                sections.push(file_section(
                    position + 1,
                    &relative.display().to_string(),
                    &content,
                ));
            }
            Err(e) => {
                warn!("Failed to process {} - Error: {}", relative.display(), e);
                skipped.push(SkippedFile {
                    path: relative.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    sections.join("\n")
}

fn folder_banner(relative_dir: &str, file_count: usize) -> String {
    let rule = "#".repeat(FOLDER_RULE_WIDTH);
    format!(
        "\n{rule}\n# Folder: {relative_dir}\n# Number of files merged: {file_count}\n{rule}\n\n"
    )
}

fn file_section(position: usize, relative_file: &str, content: &str) -> String {
    let rule = "=".repeat(FILE_RULE_WIDTH);
    format!("\n\n{rule}\nSource File {position}: {relative_file}\n{rule}\n\n{content}\n")
}

/// Path of `dir` relative to `root`; the root itself renders as `.`.
fn display_relative(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}
