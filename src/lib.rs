//! digikey-bom-report - DigiKey component report generator for BOM files
//!
//! This library resolves the line items of a Bill of Materials against the
//! DigiKey product search API and renders the results as a CSV or HTML
//! report, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_reporting`): Line items, resolved parts and the matching/pricing policies
//! - **Application Layer** (`application`): Use cases, read models and formatter selection
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use digikey_bom_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let settings = DigiKeyApiSettings::default();
//!
//! // Create adapters
//! let use_case = GenerateReportUseCase::new(
//!     CsvBomReader::new(),
//!     DigiKeyAuthenticator::new(&settings)?,
//!     DigiKeyClient::new(&settings)?,
//!     StderrProgressReporter::new(),
//!     MatchPolicy::default(),
//!     RetryPolicy::default(),
//! );
//!
//! // Execute
//! let credentials = Credentials::new("client-id", "client-secret");
//! let request = ReportRequest::new(PathBuf::from("bom.csv"), credentials);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let read_model = ReportReadModelBuilder::build(&response.context);
//! let html = HtmlReportFormatter::new()?.format(&read_model)?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_reporting;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvBomReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{CsvReportFormatter, HtmlReportFormatter};
    pub use crate::adapters::outbound::network::{
        DigiKeyApiSettings, DigiKeyAuthenticator, DigiKeyClient, DigiKeyLocale,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::bom_reporting::domain::{
        ColumnSchema, LineItem, MatchKind, PartDetails, PartNumber, ReportContext, ResolvedPart,
        SkippedRow,
    };
    pub use crate::bom_reporting::policies::{MatchPolicy, RetryPolicy};
    pub use crate::ports::outbound::{
        BomReader, CredentialExchange, Credentials, OutputPresenter, PartSearchRepository,
        ProgressReporter, ReportFormatter, SearchError,
    };
    pub use crate::shared::Result;
}
