/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod lockfile_reader;
pub mod progress_reporter;
pub mod release_date_repository;
pub mod request_pacer;
pub mod result_sink;

pub use lockfile_reader::LockfileReader;
pub use progress_reporter::ProgressReporter;
pub use release_date_repository::ReleaseDateRepository;
pub use request_pacer::RequestPacer;
pub use result_sink::{ResultArtifact, ResultSink};
