use crate::application::dto::{AuditRequest, AuditResponse, ResolutionOutcome};
use crate::ports::outbound::{
    LockfileReader, ProgressReporter, ReleaseDateRepository, RequestPacer, ResultArtifact,
    ResultSink,
};
use crate::release_audit::domain::{Cutoff, DependencyNode, PackageVersionMap, ReleaseResult};
use crate::release_audit::services::{CutoffClassifier, DependencyExtractor};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::path::Path;
use tracing::{debug, warn};

const SEPARATOR_WIDTH: usize = 80;

/// AuditReleaseDatesUseCase - Core use case for the release date audit
///
/// Loads a lockfile, flattens it into an ordered package list, resolves
/// each package's publication time one request at a time, classifies the
/// results against an optional cutoff and hands them to the result sink.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `RREPO` - ReleaseDateRepository implementation
/// * `RP` - RequestPacer implementation
/// * `PR` - ProgressReporter implementation
/// * `RS` - ResultSink implementation
pub struct AuditReleaseDatesUseCase<LR, RREPO, RP, PR, RS> {
    lockfile_reader: LR,
    release_date_repository: RREPO,
    request_pacer: RP,
    progress_reporter: PR,
    result_sink: RS,
}

impl<LR, RREPO, RP, PR, RS> AuditReleaseDatesUseCase<LR, RREPO, RP, PR, RS>
where
    LR: LockfileReader,
    RREPO: ReleaseDateRepository,
    RP: RequestPacer,
    PR: ProgressReporter,
    RS: ResultSink,
{
    /// Creates a new AuditReleaseDatesUseCase with injected dependencies
    pub fn new(
        lockfile_reader: LR,
        release_date_repository: RREPO,
        request_pacer: RP,
        progress_reporter: PR,
        result_sink: RS,
    ) -> Self {
        Self {
            lockfile_reader,
            release_date_repository,
            request_pacer,
            progress_reporter,
            result_sink,
        }
    }

    /// Executes the audit
    ///
    /// Nothing is reported or written until the lockfile has been read and
    /// parsed, so input errors leave no output behind.
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read or parsed, or if the
    /// result files cannot be written. Individual lookup failures are not
    /// errors.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Read lockfile and extract packages
        let packages = self.load_packages(&request.lockfile_path)?;

        // Step 2: Report what is about to be resolved
        self.report_header(&packages, request.cutoff.as_ref());

        // Step 3: Resolve release dates sequentially
        let outcome = self.resolve(&packages, request.cutoff.as_ref()).await;

        // Step 4: Hand result sets to the sink
        let source_name = request.source_name();
        let releases_path = self.result_sink.write_results(
            &source_name,
            ResultArtifact::AllReleases,
            &outcome.all_releases,
        )?;

        let newer_path = match outcome.newer_releases.as_deref() {
            Some(newer) if !newer.is_empty() => Some(self.result_sink.write_results(
                &source_name,
                ResultArtifact::NewerPackages,
                newer,
            )?),
            _ => None,
        };

        // Step 5: Summary
        self.report_summary(&outcome, &releases_path, newer_path.as_deref());

        Ok(AuditResponse::new(outcome, releases_path, newer_path))
    }

    /// Reads the lockfile and flattens it into an ordered package map
    fn load_packages(&self, lockfile_path: &Path) -> Result<PackageVersionMap> {
        let content = self.lockfile_reader.read_lockfile(lockfile_path)?;

        let tree = DependencyNode::from_json_str(&content).map_err(|e| {
            AuditError::LockfileParseError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let packages = DependencyExtractor::extract(&tree);
        debug!(count = packages.len(), path = %lockfile_path.display(), "extracted packages");
        Ok(packages)
    }

    /// Resolves the release date of every package, in map order
    ///
    /// Exactly one lookup is in flight at a time and the pacer is awaited
    /// between consecutive lookups whatever their outcome. A failed lookup
    /// is reported and skipped; packages already resolved stay resolved.
    pub async fn resolve(
        &self,
        packages: &PackageVersionMap,
        cutoff: Option<&Cutoff>,
    ) -> ResolutionOutcome {
        let total = packages.len();
        let mut all_releases = Vec::new();

        for (idx, (name, version)) in packages.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(format!("{}@{}", name, version).as_str()));

            match self
                .release_date_repository
                .fetch_release_date(name, version)
                .await
            {
                Ok(raw) => {
                    let release = ReleaseResult::new(name.to_string(), version.to_string(), raw);
                    if release.published_at().is_none() {
                        warn!(
                            package = name,
                            version,
                            release_date = release.release_date(),
                            "unparseable release timestamp, keeping raw value"
                        );
                    }
                    self.progress_reporter
                        .report(&format!("  Release date: {}", release.formatted_date()));
                    all_releases.push(release);
                }
                Err(e) => {
                    warn!(package = name, version, error = %e, "release date lookup failed");
                    self.progress_reporter
                        .report_error(&format!("  Release date: unavailable ({})", e));
                }
            }

            // Rate limiting: one request at a time with a fixed gap in between
            if idx + 1 < total {
                self.request_pacer.pause().await;
            }
        }

        let newer_releases = CutoffClassifier::classify(&all_releases, cutoff);
        ResolutionOutcome::new(all_releases, newer_releases, total)
    }

    fn report_header(&self, packages: &PackageVersionMap, cutoff: Option<&Cutoff>) {
        self.progress_reporter
            .report(&format!("Found {} package(s)", packages.len()));
        if let Some(cutoff) = cutoff {
            self.progress_reporter
                .report(&format!("Cutoff: {}", cutoff));
        }
        self.progress_reporter.report(&"=".repeat(SEPARATOR_WIDTH));
    }

    fn report_summary(
        &self,
        outcome: &ResolutionOutcome,
        releases_path: &Path,
        newer_path: Option<&Path>,
    ) {
        self.progress_reporter.report("");
        self.progress_reporter.report(&"=".repeat(SEPARATOR_WIDTH));
        self.progress_reporter.report_completion(&format!(
            "Done! Results saved to {}",
            releases_path.display()
        ));
        self.progress_reporter.report(&format!(
            "Succeeded: {} package(s)",
            outcome.success_count()
        ));
        self.progress_reporter.report(&format!(
            "Failed: {} package(s)",
            outcome.failure_count()
        ));

        if let Some(newer) = outcome.newer_releases.as_ref() {
            self.progress_reporter.report(&format!(
                "Newer than cutoff: {} package(s)",
                newer.len()
            ));
        }
        if let Some(path) = newer_path {
            self.progress_reporter
                .report(&format!("Newer packages saved to {}", path.display()));
        }
    }
}
