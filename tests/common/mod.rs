//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use std::fs;
use std::path::Path;

use sew_source::error::Result;
use sew_source::repository::GitOperations;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::FixtureClone;
}

/// A `GitOperations` implementation that "clones" by writing a fixed set of
/// files into the target directory.
#[allow(dead_code)]
pub struct FixtureClone {
    files: Vec<(String, Vec<u8>)>,
}

#[allow(dead_code)]
impl FixtureClone {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a text file at `relative` inside the fake checkout.
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files
            .push((relative.to_string(), content.as_bytes().to_vec()));
        self
    }

    /// Add a file with arbitrary bytes.
    pub fn with_bytes(mut self, relative: &str, content: &[u8]) -> Self {
        self.files.push((relative.to_string(), content.to_vec()));
        self
    }
}

impl GitOperations for FixtureClone {
    fn clone_repository(&self, _url: &str, target_dir: &Path) -> Result<()> {
        fs::create_dir_all(target_dir)?;
        for (relative, content) in &self.files {
            let path = target_dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        Ok(())
    }
}
