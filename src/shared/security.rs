use crate::shared::error::FetcherError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (50 MB)
///
/// A CVE list is a handful of short columns per row; anything bigger is
/// almost certainly the wrong file.
pub const MAX_INPUT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Validates that an input path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size`
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<()> {
    if !path.exists() && fs::symlink_metadata(path).is_err() {
        return Err(FetcherError::InputNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| FetcherError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(FetcherError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the path of the real CSV file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(FetcherError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(FetcherError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Split the CVE list into smaller files".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that an output location can be written safely
///
/// The parent directory must exist, and if the target already exists it
/// must not be a symbolic link.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(FetcherError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(FetcherError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Remove the link or choose another output directory".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
