/// Output format enumeration for the rendered report
///
/// This enum belongs in the application layer as it is understood by the
/// CLI, the configuration file and the formatter factory alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated rows with a fixed column order
    Csv,
    /// Self-contained HTML document (default)
    #[default]
    Html,
}

impl OutputFormat {
    /// File name used when no output path is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Csv => "component_report.csv",
            OutputFormat::Html => "component_report.html",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
