use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the report
///
/// This port abstracts the output format (CSV, HTML). Every implementation
/// renders the same read model, so formats differ only in presentation.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns `ReportError::Render` if the template cannot be loaded or
    /// rendering fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
