//! # sew-source
//!
//! Clones a GitHub repository into a temporary directory, finds the files
//! matching a configurable set of extensions, groups them by folder and writes
//! one merged text file per folder.
//!
//! ## Quick Example
//!
//! ```no_run
//! use sew_source::config::FilterConfig;
//! use sew_source::output::OutputConfig;
//! use sew_source::pipeline::{self, RunOptions};
//! use sew_source::repository::RepositoryFetcher;
//!
//! let options = RunOptions {
//!     repo_url: "https://github.com/rust-lang/book".to_string(),
//!     output_dir: "sewn".into(),
//!     filters: FilterConfig::default(),
//!     temp_root: None,
//! };
//! let summary = pipeline::run(&options, &RepositoryFetcher::new(), &OutputConfig::plain())?;
//! println!("{} artifacts", summary.merge.artifacts.len());
//! # Ok::<(), sew_source::error::Error>(())
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Validation (`validate`)**: only `http(s)://github.com/<owner>/<repo>`
//!     URLs are accepted.
//! 2.  **Fetching (`repository`, `git`)**: the repository is shallow-cloned
//!     with the system `git`; failures are classified as private, missing or
//!     unknown.
//! 3.  **Scanning (`scan`, `config`)**: the checkout is walked and files are
//!     grouped by parent directory according to a `FilterConfig`.
//! 4.  **Merging (`merge`)**: each group becomes one artifact under
//!     `<output-dir>/<repository-name>/`.
//!
//! `pipeline::run` ties the steps together and owns the temporary clone
//! directory.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod repository;
pub mod scan;
pub mod suggestions;
pub mod validate;
