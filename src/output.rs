//! # Terminal Output
//!
//! Controls how the CLI presents itself: whether colors and emoji are used,
//! and whether a spinner (while cloning) and a progress bar (while merging
//! folders) are drawn.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Progress indicators are only drawn when colors are enabled and output is
//! not suppressed with `--quiet`; otherwise hidden bars are handed out so
//! callers never need to branch.

use std::env;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Output configuration for controlling colors, emoji and progress bars.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
    /// Whether anything other than errors should be printed.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flags.
    ///
    /// `color_flag` is the value of `--color`: "always", "never", or "auto".
    pub fn from_env_and_flag(color_flag: &str, quiet: bool) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color, quiet }
    }

    /// Configuration that never draws anything fancy. Used by library
    /// callers and tests.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            quiet: true,
        }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stderr().features().colors_supported()
    }

    fn draws_progress(&self) -> bool {
        self.use_color && !self.quiet
    }

    /// Spinner shown while `git clone` runs.
    pub fn clone_spinner(&self, url: &str) -> ProgressBar {
        if !self.draws_progress() {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Cloning repo: {}", url));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Progress bar advanced once per merged folder.
    pub fn folder_progress(&self) -> ProgressBar {
        if !self.draws_progress() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::with_template("{prefix:.green} [{bar:40.green}] {pos}/{len}")
        {
            bar.set_style(style.progress_chars("█░"));
        }
        bar.set_prefix(format!("{} Processing folders", emoji(self, "📁", "[DIR]")));
        bar
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto", false)
    }
}

/// Returns `emoji_str` when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always", false);
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never", false);
        assert!(!config.use_color);
    }

    #[test]
    fn test_color_flag_is_case_insensitive() {
        assert!(!OutputConfig::from_env_and_flag("NEVER", false).use_color);
    }

    #[test]
    fn test_emoji_helper() {
        let on = OutputConfig::from_env_and_flag("always", false);
        let off = OutputConfig::from_env_and_flag("never", false);
        assert_eq!(emoji(&on, "✅", "[OK]"), "✅");
        assert_eq!(emoji(&off, "✅", "[OK]"), "[OK]");
    }

    #[test]
    fn test_plain_output_hides_progress() {
        let config = OutputConfig::plain();
        assert!(config.clone_spinner("https://github.com/foo/bar").is_hidden());
        assert!(config.folder_progress().is_hidden());
    }

    #[test]
    fn test_quiet_hides_progress_even_with_color() {
        let config = OutputConfig::from_env_and_flag("always", true);
        assert!(config.folder_progress().is_hidden());
    }
}
