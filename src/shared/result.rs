/// Result alias used throughout the crate.
///
/// Errors are carried as `anyhow::Error` so context can be attached on the way
/// up; the typed [`ReportError`](crate::shared::ReportError) stays reachable via
/// `downcast_ref` for the final exit-status translation.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
