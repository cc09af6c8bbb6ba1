use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LogError, Result};
use crate::material::FoamRequirementResult;

/// Append-only CSV log of calculation results.
///
/// The header row is written once, when the file is created or empty. Rows
/// follow the field order of [`FoamRequirementResult`].
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Creates a log backed by the file at `path`. Nothing is touched on disk
    /// until the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one result row, creating the file and its parent directory
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, result: &FoamRequirementResult) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(LogError::from)?;
        }

        let needs_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(LogError::from)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(result).map_err(LogError::from)?;
        writer.flush().map_err(LogError::from)?;

        debug!(path = %self.path.display(), header = needs_header, "appended result row");
        Ok(())
    }

    /// Reads back every logged row. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn read_all(&self) -> Result<Vec<FoamRequirementResult>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path).map_err(LogError::from)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<FoamRequirementResult>, csv::Error>>()
            .map_err(LogError::from)?;
        Ok(rows)
    }
}
