//! Default values for sew-source configuration.
//!
//! These are plain functions rather than shared statics so every caller gets
//! its own value and tests can build isolated configurations.

use std::path::PathBuf;

/// Returns the default output directory, `~/.sew_source`.
///
/// Falls back to `.sew_source` in the current directory if the home
/// directory cannot be determined. Overridden by `--output-dir` or the
/// `SEW_SOURCE_OUTPUT` environment variable.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sew_source")
}

/// Extensions merged when none are configured.
pub fn default_extensions() -> Vec<String> {
    vec![".md".to_string(), ".mdx".to_string()]
}

/// Directory names that are never scanned.
pub fn default_exclude_dirs() -> Vec<String> {
    vec![".git".to_string()]
}

/// Extension of the written artifacts.
pub fn default_output_extension() -> String {
    "txt".to_string()
}
