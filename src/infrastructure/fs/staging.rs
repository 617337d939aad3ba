//! File staging - persists asset outputs under a target directory
//!
//! Writes are atomic (tempfile in the target directory, then rename)
//! so a crash mid-run never leaves a half-written artifact behind.
//! Private key material (`*.key`) is written `0600` on Unix.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::error::BootsmithResult;

/// Persist `files` under `root`, creating parent directories.
///
/// Returns the absolute paths written, in input order.
pub fn stage_files<'a>(
    root: &Path,
    files: impl IntoIterator<Item = &'a AssetFile>,
) -> BootsmithResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in files {
        let target = root.join(file.filename());
        let parent = target.parent().unwrap_or(root);
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(file.data())?;
        tmp.persist(&target).map_err(|e| e.error)?;

        #[cfg(unix)]
        if target.extension().is_some_and(|ext| ext == "key") {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o600))?;
        }

        written.push(target);
    }
    Ok(written)
}
