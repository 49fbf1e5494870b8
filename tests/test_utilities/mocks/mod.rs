//! Mock implementations for testing
#![allow(dead_code)]

mod mock_bom_reader;
mod mock_credential_exchange;
mod mock_part_search;
mod mock_progress_reporter;

pub use mock_bom_reader::MockBomReader;
pub use mock_credential_exchange::MockCredentialExchange;
pub use mock_part_search::{product, MockPartSearch};
pub use mock_progress_reporter::MockProgressReporter;
