//! npm-release-audit - release date auditor for npm lockfiles
//!
//! This library flattens the nested `dependencies` tree of an npm lockfile,
//! resolves the publication time of every pinned package version from the
//! npm registry, and flags packages published after an optional cutoff.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`release_audit`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_release_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let lockfile_reader = FileSystemReader::new();
//! let registry = NpmRegistryClient::new(DEFAULT_REGISTRY_URL)?;
//! let pacer = FixedIntervalPacer::new();
//! let progress_reporter = StderrProgressReporter::new();
//! let result_sink = JsonResultWriter::new(PathBuf::from("out"));
//!
//! // Create use case
//! let use_case = AuditReleaseDatesUseCase::new(
//!     lockfile_reader,
//!     registry,
//!     pacer,
//!     progress_reporter,
//!     result_sink,
//! );
//!
//! // Execute
//! let cutoff: Cutoff = "2023-01-01T00:00:00Z".parse()?;
//! let request = AuditRequest::new(PathBuf::from("package-lock.json"), Some(cutoff));
//! let response = use_case.execute(request).await?;
//!
//! println!("{} package(s) resolved", response.outcome.success_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod release_audit;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, JsonResultWriter, RunLogReporter,
    };
    pub use crate::adapters::outbound::network::{NpmRegistryClient, DEFAULT_REGISTRY_URL};
    pub use crate::adapters::outbound::tee::TeeProgressReporter;
    pub use crate::adapters::outbound::timing::{FixedIntervalPacer, REQUEST_INTERVAL};
    pub use crate::application::dto::{AuditRequest, AuditResponse, ResolutionOutcome};
    pub use crate::application::use_cases::AuditReleaseDatesUseCase;
    pub use crate::ports::outbound::{
        LockfileReader, ProgressReporter, ReleaseDateRepository, RequestPacer, ResultArtifact,
        ResultSink,
    };
    pub use crate::release_audit::domain::{
        Cutoff, DependencyNode, PackageVersionMap, ReleaseResult,
    };
    pub use crate::release_audit::services::{CutoffClassifier, DependencyExtractor};
    pub use crate::shared::error::{AuditError, ExitCode, LookupError};
    pub use crate::shared::Result;
}
