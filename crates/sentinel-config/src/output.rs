//! Where verification records are written.

use std::path::{Path, PathBuf};

use sentinel_core::{DEFAULT_RESULT_FILE, DEFAULT_RESULTS_DIR};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_results_dir() -> String {
    DEFAULT_RESULTS_DIR.to_string()
}

fn default_file_name() -> String {
    DEFAULT_RESULT_FILE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory holding result files, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    /// Result file name. Fixed regardless of the seed.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl OutputConfig {
    /// Full output path: `results_dir/file_name`.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        Path::new(&self.results_dir).join(&self.file_name)
    }

    /// Reject empty values and file names that carry a path separator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.results_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.results_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.file_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "output.file_name".into(),
                reason: format!("'{}' must be a bare file name", self.file_name),
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            file_name: default_file_name(),
        }
    }
}
