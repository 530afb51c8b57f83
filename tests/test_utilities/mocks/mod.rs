/// Mock implementations for testing
mod mock_lockfile_reader;
mod mock_progress_reporter;
mod mock_release_date_repository;
mod mock_request_pacer;
mod mock_result_sink;

pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_date_repository::MockReleaseDateRepository;
pub use mock_request_pacer::MockRequestPacer;
pub use mock_result_sink::MockResultSink;
