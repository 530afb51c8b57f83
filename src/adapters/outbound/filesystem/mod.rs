/// Filesystem adapters for file I/O operations
mod file_reader;
mod result_writer;
mod run_log;

pub use file_reader::FileSystemReader;
pub use result_writer::JsonResultWriter;
pub use run_log::RunLogReporter;
