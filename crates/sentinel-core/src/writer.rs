//! Persistence of verification records.
//!
//! The default target is `results/seed42_verification.json`, resolved against
//! the current working directory. The file name does not follow the seed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::WriteError;
use crate::record::VerificationStub;

/// Directory, relative to the working directory, that holds result files.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// File name of the tracked result file.
pub const DEFAULT_RESULT_FILE: &str = "seed42_verification.json";

/// Writes a [`VerificationStub`] to a single output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `stub`, replacing any previous file at the same path.
    ///
    /// Missing parent directories are created. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `WriteError` if a directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, stub: &VerificationStub) -> Result<PathBuf, WriteError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            tracing::debug!(dir = %parent.display(), "results directory ready");
        }

        let body = stub.to_pretty_json()?;
        fs::write(&self.path, body).map_err(|source| WriteError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            seed = stub.seed,
            timestamp = %stub.timestamp_utc,
            "verification record written"
        );

        Ok(self.path.clone())
    }
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_RESULTS_DIR).join(DEFAULT_RESULT_FILE))
    }
}
