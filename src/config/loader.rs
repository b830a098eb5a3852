//! YAML file loading with an explicit per-call failure policy.

use crate::traits::{FileSystem, Output};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a YAML file could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        reason: serde_yaml::Error,
    },

    #[error("unexpected document shape in {}: {reason}", path.display())]
    Shape { path: PathBuf, reason: String },
}

/// What a caller wants done when a file cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// A missing file is silently `None`; any other failure prints a warning
    /// and is also `None`
    WarnAndContinue,
    /// Every failure, including a missing file, is returned to the caller
    FailFast,
}

impl LoadPolicy {
    /// Apply this policy to the outcome of a load.
    pub fn recover<T>(
        self,
        result: Result<T, LoadError>,
        output: &dyn Output,
        what: &str,
    ) -> Result<Option<T>, LoadError> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (LoadPolicy::FailFast, Err(err)) => Err(err),
            (LoadPolicy::WarnAndContinue, Err(LoadError::NotFound(path))) => {
                tracing::debug!(path = %path.display(), "{} not present", what);
                Ok(None)
            }
            (LoadPolicy::WarnAndContinue, Err(err)) => {
                output.warning(&format!("Failed to load {}: {}", what, err));
                Ok(None)
            }
        }
    }
}

/// Read and deserialize a YAML file.
pub fn read_yaml_file<T: DeserializeOwned>(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<T, LoadError> {
    if !fs.exists(path) {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let content = fs.read_to_string(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        reason: format!("{:#}", e),
    })?;

    serde_yaml::from_str(&content).map_err(|reason| LoadError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Read a YAML file and apply `policy` to any failure.
pub fn load_yaml_file<T: DeserializeOwned>(
    fs: &dyn FileSystem,
    output: &dyn Output,
    path: &Path,
    policy: LoadPolicy,
    what: &str,
) -> Result<Option<T>, LoadError> {
    policy.recover(read_yaml_file(fs, path), output, what)
}
