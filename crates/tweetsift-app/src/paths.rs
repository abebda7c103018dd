//! Output path helpers for extraction targets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const TARGET_EXTENSION: &str = "txt";
const MAX_TARGET_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid target name `{name}`: {reason}")]
    InvalidTarget { name: String, reason: &'static str },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validate a logical target name: non-empty, at most 64 characters, no path
/// separators, and not a relative path component.
pub fn validate_target_name(name: &str) -> Result<&str, PathError> {
    let invalid = |reason| PathError::InvalidTarget {
        name: name.to_owned(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.chars().count() > MAX_TARGET_LEN {
        return Err(invalid("name is longer than 64 characters"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("name contains path separators"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name is a relative path component"));
    }
    Ok(name)
}

/// `<target_dir>/<target>.txt`, with the target name validated.
pub fn target_file(target_dir: &Path, target: &str) -> Result<PathBuf, PathError> {
    let target = validate_target_name(target)?;
    Ok(target_dir.join(format!("{target}.{TARGET_EXTENSION}")))
}

/// Create `path` and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<PathBuf, PathError> {
    if let Err(err) = fs::create_dir_all(path) {
        if err.kind() != io::ErrorKind::AlreadyExists {
            return Err(PathError::CreateDir {
                path: path.to_path_buf(),
                source: err,
            });
        }
    }
    Ok(path.to_path_buf())
}
