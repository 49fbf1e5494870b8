use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum BOM file size (100 MB). Real BOMs are a few hundred rows.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an input file exists, is a regular file, is not a
/// symbolic link and is within the size limit.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// - `ReportError::BomNotFound` if the path does not exist
/// - `ReportError::SecurityError` for symlinks and oversized files
/// - `ReportError::FileReadError` if the path is not a regular file
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::BomNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input file is a symbolic link".to_string(),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ReportError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the BOM or check that the right file was passed".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Rejects an output path that already exists as a symbolic link.
///
/// A missing path is fine: the writer will create it.
pub fn validate_output_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(ReportError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: Output path is a symbolic link. Writing through symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
