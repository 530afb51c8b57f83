use crate::ports::outbound::{ResultArtifact, ResultSink};
use crate::release_audit::domain::ReleaseResult;
use crate::shared::error::AuditError;
use crate::shared::security::ensure_output_target;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// JsonResultWriter adapter writing result sets as pretty-printed JSON arrays
///
/// Files are named after the audited lockfile:
/// `<name>_release_dates.json` and `<name>_newer_packages.json`.
pub struct JsonResultWriter {
    output_dir: PathBuf,
}

impl JsonResultWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn file_name(source_name: &str, artifact: ResultArtifact) -> String {
        match artifact {
            ResultArtifact::AllReleases => format!("{}_release_dates.json", source_name),
            ResultArtifact::NewerPackages => format!("{}_newer_packages.json", source_name),
        }
    }
}

impl ResultSink for JsonResultWriter {
    fn write_results(
        &self,
        source_name: &str,
        artifact: ResultArtifact,
        results: &[ReleaseResult],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(Self::file_name(source_name, artifact));

        fs::create_dir_all(&self.output_dir).map_err(|e| AuditError::FileWriteError {
            path: self.output_dir.clone(),
            details: format!("Failed to create output directory: {}", e),
        })?;

        ensure_output_target(&path).map_err(|e| AuditError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let content = serde_json::to_string_pretty(results)?;
        fs::write(&path, content).map_err(|e| AuditError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}
