use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// A file that a store reads from.
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub struct Source(PathBuf);

impl FromStr for Source {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Source(PathBuf::from(s)))
    }
}

impl Source {
    /// Resolves `path` against `base_path` when it is relative, then checks that it names an existing file.
    pub fn try_from_path(base_path: &Path, path: &Path) -> Result<Source, SourceError> {
        let full_path = match path.is_absolute() {
            true => path.to_path_buf(),
            false => base_path.join(path),
        };

        Self::try_from_existing_file(full_path)
    }

    pub fn try_from_existing_file(path: PathBuf) -> Result<Source, SourceError> {
        if !path.exists() {
            return Err(SourceError::PathDoesNotExist(path));
        }
        if !path.is_file() {
            return Err(SourceError::PathIsNotAFile(path));
        }
        Ok(Source(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.display().to_string().as_str())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Path does not exist. path: {0}")]
    PathDoesNotExist(PathBuf),
    #[error("Path is not a file. path: {0}")]
    PathIsNotAFile(PathBuf),
    #[error("Empty source.")]
    Empty,
}
