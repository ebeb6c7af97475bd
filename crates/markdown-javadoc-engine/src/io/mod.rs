use crate::models::CandidateFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Root path not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a source file fully into memory
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a source file with new content
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for files whose name ends with `suffix` under `root`, sorted by path.
///
/// A `root` that is itself a file is returned on its own when it matches.
pub fn scan_source_files(root: &Path, suffix: &str) -> Result<Vec<CandidateFile>, IoError> {
    if !root.exists() {
        return Err(IoError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    if root.is_file() {
        if has_suffix(root, suffix) {
            files.push(CandidateFile::new(root.to_path_buf()));
        }
    } else {
        scan_directory_recursive(root, suffix, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    suffix: &str,
    files: &mut Vec<CandidateFile>,
) -> Result<(), IoError> {
    let scan_error = |source: std::io::Error| IoError::Scan {
        path: dir.to_path_buf(),
        source,
    };
    let entries = fs::read_dir(dir).map_err(scan_error)?;

    for entry in entries {
        let entry = entry.map_err(scan_error)?;
        let file_type = entry.file_type().map_err(scan_error)?;
        let path = entry.path();

        // Symlinked directories are not followed
        if file_type.is_dir() {
            scan_directory_recursive(&path, suffix, files)?;
        } else if has_suffix(&path, suffix) {
            debug!(path = %path.display(), "found candidate file");
            files.push(CandidateFile::new(path));
        }
    }

    Ok(())
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
