/// ProgressReporter port for reporting progress during an audit run
///
/// This port abstracts progress reporting (console, run log file, ...)
/// so the resolution pipeline never writes output directly. Each call
/// is one self-contained event; implementations must not buffer events
/// across calls.
pub trait ProgressReporter {
    /// Reports an informational line
    ///
    /// # Arguments
    /// * `message` - The line to report
    fn report(&self, message: &str);

    /// Reports that work on item `current` of `total` has started
    ///
    /// # Arguments
    /// * `current` - 1-based index of the current item
    /// * `total` - Total number of items
    /// * `message` - Optional description of the item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning line
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
