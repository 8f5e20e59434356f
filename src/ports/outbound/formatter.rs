use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a report flavor
///
/// Implementations render the format-neutral read model into a document
/// (HTML, Markdown, JSON). Rendering the same model twice must give the
/// same output.
pub trait ReportFormatter {
    /// Renders the read model into a complete document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
