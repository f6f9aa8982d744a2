//! # Run Orchestration
//!
//! A run clones one repository and turns it into one artifact per folder:
//!
//! 1.  **Validate**: reject malformed URLs before any I/O.
//! 2.  **Fetch**: clone into a fresh temporary directory.
//! 3.  **Scan**: walk the checkout and group matching files by folder.
//! 4.  **Merge**: write one artifact per folder under the output directory.
//!
//! The temporary directory is a [`TempDir`] owned by [`run`]. It is removed
//! when `run` returns, whichever step failed.

use std::path::PathBuf;

use log::info;
use tempfile::TempDir;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::merge::{MergeReport, Merger};
use crate::output::OutputConfig;
use crate::repository::RepositoryFetcher;
use crate::scan::scan_sources;
use crate::validate::{repository_name, validate_github_url};

/// Everything a run needs to know.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Repository to clone.
    pub repo_url: String,
    /// Artifacts go to `<output_dir>/<repository-name>/`.
    pub output_dir: PathBuf,
    /// Scanner filters and artifact extension.
    pub filters: FilterConfig,
    /// Parent for the temporary clone directory; the system temp dir if unset.
    pub temp_root: Option<PathBuf>,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub repository_name: String,
    /// Number of folders with at least one matching file.
    pub folders: usize,
    /// Number of matching files across all folders.
    pub files: usize,
    pub merge: MergeReport,
}

/// Clone, scan and merge a repository.
pub fn run(
    options: &RunOptions,
    fetcher: &RepositoryFetcher,
    output: &OutputConfig,
) -> Result<RunSummary> {
    validate_github_url(&options.repo_url)?;
    options.filters.validate()?;

    let temp_dir = create_temp_dir(options)?;
    info!("Created temporary directory {}", temp_dir.path().display());

    let spinner = output.clone_spinner(&options.repo_url);
    let fetched = fetcher.fetch(&options.repo_url, temp_dir.path());
    spinner.finish_and_clear();
    let location = fetched?;
    info!("Cloned {} to {}", location.url, location.path.display());

    let groups = scan_sources(&location.path, &options.filters)?;

    let merge = Merger::new(options.filters.output_extension.clone())
        .with_progress(output.folder_progress())
        .write_artifacts(&groups, &location.path, &options.output_dir)?;

    Ok(RunSummary {
        repository_name: repository_name(&options.repo_url).to_string(),
        folders: groups.len(),
        files: groups.file_count(),
        merge,
    })
}

fn create_temp_dir(options: &RunOptions) -> Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("sew-source-");
    let temp_dir = match &options.temp_root {
        Some(root) => builder.tempdir_in(root)?,
        None => builder.tempdir()?,
    };
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FetchFailure};
    use crate::repository::GitOperations;
    use std::fs;
    use std::path::Path;

    /// Writes a small documentation tree instead of cloning.
    struct FakeClone;

    impl GitOperations for FakeClone {
        fn clone_repository(&self, _url: &str, target_dir: &Path) -> Result<()> {
            fs::create_dir_all(target_dir.join("docs"))?;
            fs::write(target_dir.join("README.md"), "# Readme")?;
            fs::write(target_dir.join("docs/guide.md"), "# Guide")?;
            Ok(())
        }
    }

    struct FailingClone;

    impl GitOperations for FailingClone {
        fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()> {
            // Leave something behind so cleanup is observable.
            fs::create_dir_all(target_dir)?;
            Err(Error::Fetch {
                url: url.to_string(),
                kind: FetchFailure::NotFound,
                stderr: "remote: Repository not found.".to_string(),
            })
        }
    }

    fn options(url: &str, base: &Path) -> RunOptions {
        let temp_root = base.join("tmp");
        fs::create_dir_all(&temp_root).unwrap();
        RunOptions {
            repo_url: url.to_string(),
            output_dir: base.join("out"),
            filters: FilterConfig::default(),
            temp_root: Some(temp_root),
        }
    }

    fn is_empty_dir(path: &Path) -> bool {
        fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn test_run_writes_artifacts_and_removes_clone() {
        let base = TempDir::new().unwrap();
        let options = options("https://github.com/foo/handbook.git", base.path());
        let fetcher = RepositoryFetcher::with_operations(Box::new(FakeClone));

        let summary = run(&options, &fetcher, &OutputConfig::plain()).unwrap();

        assert_eq!(summary.repository_name, "handbook");
        assert_eq!(summary.folders, 2);
        assert_eq!(summary.files, 2);
        assert_eq!(
            summary.merge.artifacts,
            vec![
                base.path().join("out/handbook/1_handbook.txt"),
                base.path().join("out/handbook/2_docs.txt"),
            ]
        );
        assert!(is_empty_dir(&base.path().join("tmp")));
    }

    #[test]
    fn test_run_removes_clone_after_fetch_failure() {
        let base = TempDir::new().unwrap();
        let options = options("https://github.com/foo/missing", base.path());
        let fetcher = RepositoryFetcher::with_operations(Box::new(FailingClone));

        let err = run(&options, &fetcher, &OutputConfig::plain()).unwrap_err();

        assert!(matches!(
            err,
            Error::Fetch {
                kind: FetchFailure::NotFound,
                ..
            }
        ));
        assert!(is_empty_dir(&base.path().join("tmp")));
        assert!(!base.path().join("out").exists());
    }

    #[test]
    fn test_run_rejects_invalid_url_before_creating_anything() {
        let base = TempDir::new().unwrap();
        let options = options("https://gitlab.com/foo/bar", base.path());
        let fetcher = RepositoryFetcher::with_operations(Box::new(FakeClone));

        let err = run(&options, &fetcher, &OutputConfig::plain()).unwrap_err();

        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(is_empty_dir(&base.path().join("tmp")));
    }

    #[test]
    fn test_run_removes_clone_after_merge_failure() {
        let base = TempDir::new().unwrap();
        let options = options("https://github.com/foo/handbook", base.path());
        fs::write(base.path().join("out"), "not a directory").unwrap();
        let fetcher = RepositoryFetcher::with_operations(Box::new(FakeClone));

        let err = run(&options, &fetcher, &OutputConfig::plain()).unwrap_err();

        assert!(matches!(err, Error::OutputWrite { .. }));
        assert!(is_empty_dir(&base.path().join("tmp")));
    }

    #[test]
    fn test_run_rejects_invalid_filters() {
        let base = TempDir::new().unwrap();
        let mut options = options("https://github.com/foo/handbook", base.path());
        options.filters.extensions.clear();
        let fetcher = RepositoryFetcher::with_operations(Box::new(FakeClone));

        let err = run(&options, &fetcher, &OutputConfig::plain()).unwrap_err();

        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
