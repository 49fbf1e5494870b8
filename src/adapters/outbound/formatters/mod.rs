/// Formatter adapters for the report output formats
mod csv_formatter;
mod html_formatter;

pub use csv_formatter::{CsvReportFormatter, CSV_COLUMNS};
pub use html_formatter::{HtmlReportFormatter, DEFAULT_TEMPLATE};
