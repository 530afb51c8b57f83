use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Largest lockfile we are willing to load into memory (100 MB)
pub const MAX_LOCKFILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a plain lockfile we can safely read
///
/// The path itself is inspected with `symlink_metadata()`, so a link
/// planted in place of the lockfile is refused rather than followed.
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if the path cannot be inspected, is a symbolic link,
/// is anything other than a regular file, or exceeds `max_size`.
pub fn inspect_lockfile(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Cannot inspect lockfile {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "{} is a symbolic link; point at the lockfile itself instead",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let size = metadata.len();
    if size > max_size {
        anyhow::bail!(
            "{} is {} bytes, above the {} byte lockfile limit",
            path.display(),
            size,
            max_size
        );
    }

    Ok(size)
}

/// Checks that an output file may be (re)created at `path`
///
/// A missing path is fine. An existing regular file is fine and will be
/// replaced. A symbolic link is refused so results never land outside the
/// output directory, and a directory is refused because it cannot be
/// replaced by a file.
///
/// # Errors
/// Returns an error describing why the target cannot be written.
pub fn ensure_output_target(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!("Cannot inspect output file {}: {}", path.display(), e),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "{} is a symbolic link; refusing to write results through it",
            path.display()
        );
    }

    if metadata.is_dir() {
        anyhow::bail!("{} is a directory, not a file", path.display());
    }

    Ok(())
}
