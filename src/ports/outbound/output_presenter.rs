use crate::shared::Result;

/// OutputPresenter port for delivering the finished report
///
/// Called at most once per run, and only after every pipeline step succeeded,
/// so a failed run never leaves a partial report behind.
pub trait OutputPresenter {
    /// Writes the rendered report to its destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
