use crate::release_audit::domain::ReleaseResult;
use std::path::PathBuf;

/// ResolutionOutcome - Result of one pass of the resolution pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// Every package whose release date was resolved, in resolution order
    pub all_releases: Vec<ReleaseResult>,
    /// Releases newer than the cutoff
    /// None = no cutoff supplied, Some(vec) = classified (possibly empty)
    pub newer_releases: Option<Vec<ReleaseResult>>,
    /// Number of packages attempted
    pub total_count: usize,
}

impl ResolutionOutcome {
    pub fn new(
        all_releases: Vec<ReleaseResult>,
        newer_releases: Option<Vec<ReleaseResult>>,
        total_count: usize,
    ) -> Self {
        Self {
            all_releases,
            newer_releases,
            total_count,
        }
    }

    pub fn success_count(&self) -> usize {
        self.all_releases.len()
    }

    pub fn failure_count(&self) -> usize {
        self.total_count - self.success_count()
    }
}

/// AuditResponse - Response DTO from the release date audit use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub outcome: ResolutionOutcome,
    /// Where all resolved releases were written
    pub releases_path: PathBuf,
    /// Where the newer subset was written; only present when a cutoff
    /// was supplied and at least one package is newer
    pub newer_path: Option<PathBuf>,
}

impl AuditResponse {
    pub fn new(outcome: ResolutionOutcome, releases_path: PathBuf, newer_path: Option<PathBuf>) -> Self {
        Self {
            outcome,
            releases_path,
            newer_path,
        }
    }
}
