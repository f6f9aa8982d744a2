//! Sew command implementation
//!
//! Clones the repository, scans it and writes one merged file per folder.
//! Progress is printed to stdout; errors are returned to `main`, which prints
//! them to stderr and exits with status 1.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sew_source::config::{self, FilterConfig, FilterOverrides};
use sew_source::defaults;
use sew_source::output::{emoji, OutputConfig};
use sew_source::pipeline::{self, RunOptions};
use sew_source::repository::RepositoryFetcher;
use sew_source::suggestions;

/// Arguments for sewing a repository
#[derive(Args, Debug)]
pub struct SewArgs {
    /// GitHub repository URL to clone
    #[arg(short, long, value_name = "URL")]
    pub repo_url: String,

    /// Output directory to save the sewed source [default: ~/.sew_source]
    #[arg(short, long, value_name = "DIR", env = "SEW_SOURCE_OUTPUT")]
    pub output_dir: Option<PathBuf>,

    /// Only include directories whose path contains this text (repeatable)
    #[arg(short, long = "include-dirs", value_name = "DIR")]
    pub include_dirs: Vec<String>,

    /// Exclude directories with this name (repeatable)
    #[arg(short = 'x', long = "exclude-dirs", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Filenames that should never be merged, case-insensitive (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub blacklist: Vec<String>,

    /// Extensions to merge [default: .md,.mdx]
    #[arg(short, long, value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// YAML file with filter settings; command-line values are layered on top
    #[arg(short, long, value_name = "FILE", env = "SEW_SOURCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extension of the merged files [default: txt]
    #[arg(long, value_name = "EXT")]
    pub output_ext: Option<String>,

    /// Parent directory for the temporary clone [default: system temp dir]
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl SewArgs {
    /// Filter configuration from the optional config file plus flags.
    fn filters(&self) -> Result<FilterConfig> {
        let base = match &self.config {
            Some(path) => config::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => FilterConfig::default(),
        };

        Ok(base.with_overrides(FilterOverrides {
            include_dirs: self.include_dirs.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            blacklist: self.blacklist.clone(),
            extensions: self.extensions.clone(),
            output_extension: self.output_ext.clone(),
        }))
    }
}

/// Execute the sew command
pub fn execute(args: SewArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag, args.quiet);

    let options = RunOptions {
        repo_url: args.repo_url.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(defaults::default_output_dir),
        filters: args.filters()?,
        temp_root: args.temp_dir.clone(),
    };

    if !out.quiet {
        println!(
            "{} Sewing {} into {}",
            emoji(&out, "🧵", "[SEW]"),
            options.repo_url,
            options.output_dir.display()
        );
    }

    let summary = pipeline::run(&options, &RepositoryFetcher::new(), &out)
        .map_err(suggestions::with_hints)?;

    if !out.quiet {
        println!(
            "{} Found {} files in {} folders",
            emoji(&out, "🚀", "[INFO]"),
            summary.files,
            summary.folders
        );

        for skipped in &summary.merge.skipped {
            println!(
                "{} Failed to process {} - Error: {}",
                emoji(&out, "❌", "[WARN]"),
                skipped.path.display(),
                skipped.reason
            );
        }

        if summary.files == 0 {
            println!(
                "{} No files matched extensions {}",
                emoji(&out, "⚠️", "[WARN]"),
                options.filters.extensions.join(", ")
            );
        }

        println!(
            "{} Done! {} files written to {}",
            emoji(&out, "✨", "[OK]"),
            summary.merge.artifacts.len(),
            summary.merge.output_root.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(repo_url: &str) -> SewArgs {
        SewArgs {
            repo_url: repo_url.to_string(),
            output_dir: None,
            include_dirs: Vec::new(),
            exclude_dirs: Vec::new(),
            blacklist: Vec::new(),
            extensions: Vec::new(),
            config: None,
            output_ext: None,
            temp_dir: None,
            quiet: true,
        }
    }

    #[test]
    fn test_execute_invalid_url() {
        let temp = TempDir::new().unwrap();
        let mut args = args("https://gitlab.com/foo/bar");
        args.output_dir = Some(temp.path().join("out"));

        let err = execute(args, "never").unwrap_err().to_string();
        assert!(err.contains("Invalid GitHub URL format"));
        assert!(err.contains("hint:"));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_filters_default() {
        let filters = args("https://github.com/foo/bar").filters().unwrap();
        assert_eq!(filters, FilterConfig::default());
    }

    #[test]
    fn test_filters_layer_flags_over_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("filters.yaml");
        fs::write(
            &config_path,
            "exclude_dirs: [vendor]\nextensions: [.rst]\n",
        )
        .unwrap();

        let mut args = args("https://github.com/foo/bar");
        args.config = Some(config_path);
        args.exclude_dirs = vec!["node_modules".to_string()];
        args.blacklist = vec!["README.md".to_string()];

        let filters = args.filters().unwrap();
        assert_eq!(filters.exclude_dirs, vec!["vendor", "node_modules"]);
        assert_eq!(filters.blacklist, vec!["README.md"]);
        assert_eq!(filters.extensions, vec![".rst"]);
    }

    #[test]
    fn test_filters_missing_config_file() {
        let mut args = args("https://github.com/foo/bar");
        args.config = Some(PathBuf::from("/nonexistent/filters.yaml"));

        let err = args.filters().unwrap_err().to_string();
        assert!(err.contains("Failed to load config file"));
    }
}
