use crate::ports::outbound::LockfileReader;
use crate::shared::error::AuditError;
use crate::shared::security::{inspect_lockfile, MAX_LOCKFILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading lockfiles from the file system
///
/// This adapter implements the LockfileReader port. Reads are guarded
/// by the same security checks for every file:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if !lockfile_path.exists() {
            return Err(AuditError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: format!(
                    "File '{}' does not exist.\n   \
                     Pass the path to a package-lock.json (or `npm ls --all --json` output) as the first argument.",
                    lockfile_path.display()
                ),
            }
            .into());
        }

        inspect_lockfile(lockfile_path, MAX_LOCKFILE_SIZE).map_err(|e| {
            AuditError::InvalidLockfilePath {
                path: lockfile_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        fs::read_to_string(lockfile_path).map_err(|e| {
            AuditError::LockfileParseError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
