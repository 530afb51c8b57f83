use crate::release_audit::domain::ReleaseResult;
use crate::shared::Result;
use std::path::PathBuf;

/// Which result set is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultArtifact {
    /// Every successfully resolved package
    AllReleases,
    /// Only packages published after the cutoff
    NewerPackages,
}

/// ResultSink port for persisting the final result sets
pub trait ResultSink {
    /// Writes one result set
    ///
    /// # Arguments
    /// * `source_name` - Base name of the audited lockfile (without extension)
    /// * `artifact` - Which result set this is
    /// * `results` - The records, in resolution order
    ///
    /// # Returns
    /// Where the results were written
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails
    fn write_results(
        &self,
        source_name: &str,
        artifact: ResultArtifact,
        results: &[ReleaseResult],
    ) -> Result<PathBuf>;
}
