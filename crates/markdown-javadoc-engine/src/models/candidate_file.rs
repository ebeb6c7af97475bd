use std::path::{Path, PathBuf};

/// A source file selected for conversion, ordered by its path string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateFile {
    sort_key: String,
    path: PathBuf,
}

impl CandidateFile {
    /// Create a new CandidateFile from a filesystem path
    pub fn new(path: PathBuf) -> Self {
        let sort_key = path.to_string_lossy().into_owned();
        Self { sort_key, path }
    }

    /// Get the filesystem path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the string form used to order candidates
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
