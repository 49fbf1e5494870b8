use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::security::validate_output_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the report artifact
///
/// This adapter implements the OutputPresenter port. Existing files are
/// overwritten; the file handle is closed before `present` returns on every
/// path.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(ReportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        validate_output_not_symlink(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| ReportError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(
            path = %self.output_path.display(),
            bytes = content.len(),
            "report written"
        );
        Ok(())
    }
}
