use crate::release_audit::domain::Cutoff;
use std::path::PathBuf;

/// AuditRequest - Internal request DTO for the release date audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Path to the JSON lockfile to audit
    pub lockfile_path: PathBuf,
    /// Optional instant; releases strictly after it are reported separately
    pub cutoff: Option<Cutoff>,
}

impl AuditRequest {
    pub fn new(lockfile_path: PathBuf, cutoff: Option<Cutoff>) -> Self {
        Self {
            lockfile_path,
            cutoff,
        }
    }

    /// Base name of the lockfile without its extension, used to name result files
    pub fn source_name(&self) -> String {
        self.lockfile_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "lockfile".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name_strips_directory_and_extension() {
        let request = AuditRequest::new(PathBuf::from("fixtures/app/package-lock.json"), None);
        assert_eq!(request.source_name(), "package-lock");
    }

    #[test]
    fn test_source_name_keeps_inner_dots() {
        let request = AuditRequest::new(PathBuf::from("deps.2024.json"), None);
        assert_eq!(request.source_name(), "deps.2024");
    }

    #[test]
    fn test_source_name_without_extension() {
        let request = AuditRequest::new(PathBuf::from("lock"), None);
        assert_eq!(request.source_name(), "lock");
    }
}
