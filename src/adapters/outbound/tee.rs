use crate::ports::outbound::ProgressReporter;

/// TeeProgressReporter forwards every event to two reporters, in order
///
/// Used to show progress on the console while appending the same events
/// to the run log.
pub struct TeeProgressReporter<A, B> {
    first: A,
    second: B,
}

impl<A, B> TeeProgressReporter<A, B>
where
    A: ProgressReporter,
    B: ProgressReporter,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> ProgressReporter for TeeProgressReporter<A, B>
where
    A: ProgressReporter,
    B: ProgressReporter,
{
    fn report(&self, message: &str) {
        self.first.report(message);
        self.second.report(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.first.report_progress(current, total, message);
        self.second.report_progress(current, total, message);
    }

    fn report_error(&self, message: &str) {
        self.first.report_error(message);
        self.second.report_error(message);
    }

    fn report_completion(&self, message: &str) {
        self.first.report_completion(message);
        self.second.report_completion(message);
    }
}
