use crate::errors::AppError;
use log::debug;
use std::fs;
use std::path::Path;

/// Write snapshot bytes to `path`, creating parent directories if needed.
/// The bytes are written exactly as received from the camera.
pub fn write_snapshot(path: &Path, data: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Output directory '{}' does not exist, attempting to create it.", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!(
                    "Failed to create output directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    fs::write(path, data).map_err(|e| {
        AppError::Io(format!(
            "Failed to write snapshot to '{}': {}",
            path.display(),
            e
        ))
    })
}
