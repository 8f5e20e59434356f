/// ProgressReporter port for user-facing progress output
///
/// Diagnostics go through `tracing`; this port carries the messages a user
/// running the tool is meant to see (steps, lookup progress, warnings).
pub trait ProgressReporter {
    /// Reports a step message
    fn report(&self, message: &str);

    /// Reports progress of a counted operation
    ///
    /// # Arguments
    /// * `current` - Number of completed items (1-based)
    /// * `total` - Total number of items
    /// * `message` - Optional item description, e.g. the identity just fetched
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or non-fatal error
    fn report_error(&self, message: &str);

    /// Reports completion of an operation and ends any running progress display
    fn report_completion(&self, message: &str);
}
