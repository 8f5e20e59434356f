use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum input file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` names an existing regular file that may be read.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// Returns the file size on success.
///
/// # Errors
/// - [`ReportError::InputNotFound`] if nothing exists at `path`
/// - [`ReportError::Security`] for symbolic links, non-regular files and
///   files larger than [`MAX_FILE_SIZE`]
pub fn validate_input_file(path: &Path) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ReportError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(ReportError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(security_violation(
            path,
            "symbolic links are not allowed as input",
        ));
    }

    if !metadata.is_file() {
        return Err(security_violation(path, "not a regular file"));
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Validates that an existing output target is not a symbolic link.
///
/// A missing target is fine; it will be created.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(security_violation(
            path,
            "refusing to write through a symbolic link",
        )),
        Ok(metadata) if metadata.is_dir() => Err(security_violation(path, "is a directory")),
        _ => Ok(()),
    }
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(security_violation(
            path,
            &format!(
                "file is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
        ));
    }
    Ok(())
}

fn security_violation(path: &Path, reason: &str) -> anyhow::Error {
    ReportError::Security {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}
