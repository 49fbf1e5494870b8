use crate::adapters::outbound::formatters::{CsvReportFormatter, HtmlReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::path::Path;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `template` - Optional Handlebars template replacing the built-in
    ///   one; only meaningful for HTML
    ///
    /// # Errors
    /// `ReportError::Render` when the template cannot be read or compiled
    ///
    /// # Examples
    /// ```
    /// use digikey_bom_report::application::dto::OutputFormat;
    /// use digikey_bom_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv, None).unwrap();
    /// ```
    pub fn create(format: OutputFormat, template: Option<&Path>) -> Result<Box<dyn ReportFormatter>> {
        match format {
            OutputFormat::Csv => {
                if let Some(path) = template {
                    tracing::warn!(template = %path.display(), "template is ignored for CSV output");
                }
                Ok(Box::new(CsvReportFormatter::new()))
            }
            OutputFormat::Html => match template {
                Some(path) => Ok(Box::new(HtmlReportFormatter::with_template_file(path)?)),
                None => Ok(Box::new(HtmlReportFormatter::new()?)),
            },
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use digikey_bom_report::application::dto::OutputFormat;
    /// use digikey_bom_report::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Rendering HTML report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Rendering CSV report...",
            OutputFormat::Html => "📝 Rendering HTML report...",
        }
    }
}
