use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single snapshot file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const SYMLINK_HINT: &str = "Copy the file into the snapshot directory instead of linking it";

/// Rejects symbolic links
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link; {} operations on symbolic links are not allowed",
                operation
            ),
            hint: SYMLINK_HINT.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split the snapshot or filter the collection upstream".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a text file after checking it is a regular, reasonably sized file
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link or not a regular file
/// - The file exceeds `MAX_FILE_SIZE`
pub fn read_guarded(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: SYMLINK_HINT.to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
