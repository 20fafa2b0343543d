//! [`TestConfigDir`] fixture for configuration file tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for repair configuration in tests.
pub const CONFIG_FILE: &str = "md-repair.toml";

/// A temporary directory holding a single repair configuration file.
///
/// # Example
///
/// ```rust
/// use md_repair_test_utils::config::TestConfigDir;
///
/// let dir = TestConfigDir::with_config("[at_symbol]\nenabled = false\n");
/// assert!(dir.config_path().exists());
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a directory and write `content` as the configuration file.
    pub fn with_config(content: &str) -> Self {
        let dir = Self::new();
        dir.write_config(content);
        dir
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the configuration file, whether or not it has been written.
    pub fn config_path(&self) -> PathBuf {
        self.root().join(CONFIG_FILE)
    }

    /// Overwrite the configuration file.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }
}
