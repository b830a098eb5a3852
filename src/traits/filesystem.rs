use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Trait for filesystem operations to enable testing with mocks
///
/// Only read access is exposed: nothing in this tool writes credentials or
/// configuration back to disk.
pub trait FileSystem: Send + Sync {
    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation using std::fs
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Mock filesystem implementation for testing (in-memory)
pub struct MockFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    reads: Arc<RwLock<HashMap<PathBuf, usize>>>,
    exists_checks: Arc<RwLock<HashMap<PathBuf, usize>>>,
}

impl MockFileSystem {
    /// Create new empty mock filesystem
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            reads: Arc::new(RwLock::new(HashMap::new())),
            exists_checks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a file into the mock filesystem
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), contents.to_string());
    }

    /// Number of times `read_to_string` was called for a path
    pub fn read_count(&self, path: &Path) -> usize {
        self.reads.read().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Number of times `exists` was called for a path
    pub fn exists_count(&self, path: &Path) -> usize {
        self.exists_checks
            .read()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        *self
            .reads
            .write()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert(0) += 1;

        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .with_context(|| format!("File not found in mock filesystem: {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        *self
            .exists_checks
            .write()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert(0) += 1;

        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_reads_per_path() {
        let fs = MockFileSystem::new();
        let path = PathBuf::from("/project/config/vcf-secrets.yaml");
        fs.add_file(&path, "esxi_root_password: x\n");

        assert!(fs.exists(&path));
        fs.read_to_string(&path).unwrap();
        fs.read_to_string(&path).unwrap();

        assert_eq!(fs.read_count(&path), 2);
        assert_eq!(fs.exists_count(&path), 1);
        assert_eq!(fs.read_count(Path::new("/other")), 0);
    }

    #[test]
    fn test_mock_missing_file_is_error() {
        let fs = MockFileSystem::new();
        let result = fs.read_to_string(Path::new("/nope.yaml"));

        assert!(result.is_err());
        assert!(!fs.exists(Path::new("/nope.yaml")));
    }

    #[test]
    fn test_real_filesystem_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vcf-config.yaml");
        std::fs::write(&path, "common: {}\n").unwrap();

        let fs = RealFileSystem;
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "common: {}\n");
        assert!(!fs.exists(&dir.path().join("missing.yaml")));
    }
}
