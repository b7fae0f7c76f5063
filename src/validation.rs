use crate::error::{Result, ToolError};
use std::fs;
use std::path::Path;

/// Checks that `path` exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ToolError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ToolError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Creates `path` and any missing parents. An existing directory is fine.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(ToolError::NotADirectory(path.to_path_buf()));
    }
    fs::create_dir_all(path).map_err(|_| ToolError::DirectoryCreationFailed(path.to_path_buf()))
}

/// True when `candidate` is `root` itself or lies underneath it.
///
/// Both paths are canonicalized when possible so `./out` and `out` compare
/// equal; a path that does not exist yet is compared as given.
pub fn is_within(candidate: &Path, root: &Path) -> bool {
    let candidate = candidate
        .canonicalize()
        .unwrap_or_else(|_| candidate.to_path_buf());
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    candidate.starts_with(root)
}
