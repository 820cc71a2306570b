use std::path::{Path, PathBuf};

use crate::foundation::error::{ContribError, ContribResult};

/// Directory used when neither the CLI nor `OUTPUT_DIR` names one.
pub const DEFAULT_OUTPUT_DIR: &str = "./profile-3d-contrib";

/// Write `contents` to `dir/file_name`, creating missing directories. Returns the written path.
///
/// `file_name` may contain subdirectories.
pub fn write_output(
    dir: impl AsRef<Path>,
    file_name: &str,
    contents: impl AsRef<[u8]>,
) -> ContribResult<PathBuf> {
    let path = dir.as_ref().join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ContribError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(&path, contents)
        .map_err(|e| ContribError::io(format!("write '{}': {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "wrote output");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/output.rs"]
mod tests;
