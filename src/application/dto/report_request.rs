use crate::bom_reporting::domain::ColumnSchema;
use crate::ports::outbound::Credentials;
use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the BOM export
    pub bom_path: PathBuf,
    /// Which BOM columns hold the part number, quantity and so on
    pub column_schema: ColumnSchema,
    /// Distributor API credentials for the run's single token exchange
    pub credentials: Credentials,
    /// Currency the distributor was asked to price in
    pub currency: String,
}

impl ReportRequest {
    pub fn new(bom_path: PathBuf, credentials: Credentials) -> Self {
        Self {
            bom_path,
            column_schema: ColumnSchema::default(),
            credentials,
            currency: "USD".to_string(),
        }
    }

    pub fn with_column_schema(mut self, column_schema: ColumnSchema) -> Self {
        self.column_schema = column_schema;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
