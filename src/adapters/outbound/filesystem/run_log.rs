use crate::ports::outbound::ProgressReporter;
use crate::shared::security::ensure_output_target;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::warn;

/// RunLogReporter adapter appending progress events to a plain text log
///
/// The file (and its parent directory) is created on the first event, so
/// a run that fails before reporting anything leaves nothing behind. The
/// first event truncates a log left by a previous run. Every event is
/// written and flushed on its own; a crash loses at most the event in
/// flight.
///
/// A failing log never aborts the run. The first failure is printed to
/// stderr as a warning; later ones only go to the diagnostic log.
pub struct RunLogReporter {
    path: PathBuf,
    file: Mutex<Option<File>>,
    failure_reported: AtomicBool,
}

impl RunLogReporter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: Mutex::new(None),
            failure_reported: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        ensure_output_target(path)?;
        Ok(File::create(path)?)
    }

    fn try_append(&self, line: &str) -> Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| anyhow::anyhow!("run log lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(Self::open(&self.path)?);
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", line)?;
            file.flush()?;
        }
        Ok(())
    }

    fn append_line(&self, line: &str) {
        if let Err(e) = self.try_append(line) {
            warn!(path = %self.path.display(), error = %e, "failed to append to run log");
            if !self.failure_reported.swap(true, Ordering::SeqCst) {
                eprintln!(
                    "⚠️  Warning: Could not write run log {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl ProgressReporter for RunLogReporter {
    fn report(&self, message: &str) {
        self.append_line(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        match message {
            Some(msg) => self.append_line(&format!("[{}/{}] {}", current, total, msg)),
            None => self.append_line(&format!("[{}/{}]", current, total)),
        }
    }

    fn report_error(&self, message: &str) {
        self.append_line(message);
    }

    fn report_completion(&self, message: &str) {
        self.append_line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nothing_is_created_before_first_event() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");
        let _reporter = RunLogReporter::new(out_dir.join("result.txt"));

        assert!(!out_dir.exists());
    }

    #[test]
    fn test_events_are_appended_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("result.txt");
        let reporter = RunLogReporter::new(path.clone());

        reporter.report("Found 2 package(s)");
        reporter.report_progress(1, 2, Some("a@1.0.0"));
        reporter.report_error("  Release date: unavailable");
        reporter.report_progress(2, 2, None);
        reporter.report_completion("Done");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Found 2 package(s)\n[1/2] a@1.0.0\n  Release date: unavailable\n[2/2]\nDone\n"
        );
    }

    #[test]
    fn test_previous_log_is_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("result.txt");
        fs::write(&path, "stale content from an earlier run\n").unwrap();

        let reporter = RunLogReporter::new(path.clone());
        reporter.report("fresh");

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_unwritable_log_does_not_interrupt_reporting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("result.txt");
        fs::create_dir(&path).unwrap();

        let reporter = RunLogReporter::new(path.clone());
        reporter.report("first");
        reporter.report("second");

        assert!(reporter.failure_reported.load(Ordering::SeqCst));
        assert!(path.is_dir());
    }

    #[test]
    fn test_each_event_is_flushed_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("result.txt");
        let reporter = RunLogReporter::new(path.clone());

        reporter.report("first");
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");
        reporter.report("second");
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
