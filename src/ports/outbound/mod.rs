/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, distributor API, console).
pub mod bom_reader;
pub mod credential_exchange;
pub mod formatter;
pub mod output_presenter;
pub mod part_search_repository;
pub mod progress_reporter;

pub use bom_reader::{BomReader, BomRow, BomRows};
pub use credential_exchange::{CredentialExchange, Credentials};
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use part_search_repository::{PartSearchRepository, SearchError};
pub use progress_reporter::ProgressReporter;
