use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to load
/// a JSON lockfile before it is parsed into a dependency tree.
pub trait LockfileReader {
    /// Reads the lockfile at the specified path
    ///
    /// # Arguments
    /// * `lockfile_path` - Path to the JSON lockfile
    ///
    /// # Returns
    /// The raw content of the lockfile as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The path fails security validation (symlink, oversized file)
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
