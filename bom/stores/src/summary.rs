use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SummaryStoreError {
    #[error("Unable to write summary. path: {path}, cause: {reason}")]
    UnableToWrite { path: PathBuf, reason: std::io::Error },
}

/// Writes an already rendered summary document (CSV or JSON), replacing any existing file.
pub fn store_summary(path: &Path, content: &str) -> Result<(), SummaryStoreError> {
    fs::write(path, content).map_err(|reason| SummaryStoreError::UnableToWrite {
        path: path.to_path_buf(),
        reason,
    })?;

    info!("Stored summary. path: {}, bytes: {}", path.display(), content.len());

    Ok(())
}
