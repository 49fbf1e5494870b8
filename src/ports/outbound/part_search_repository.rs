use crate::bom_reporting::domain::{PartNumber, PartSearchResult, RunContext};
use thiserror::Error;

/// Failure of a single part search. Never fatal for the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rate limiting, 5xx or a network problem; worth retrying
    #[error("transient distributor error: {details}")]
    Transient { details: String },

    /// The distributor has no such product
    #[error("part not found")]
    NotFound,

    /// Any other refusal (bad request, expired token...); retrying won't help
    #[error("request rejected (HTTP {status}): {details}")]
    Rejected { status: u16, details: String },
}

impl SearchError {
    pub fn is_transient(&self) -> bool {
        matches!(self, SearchError::Transient { .. })
    }
}

/// PartSearchRepository port for querying the distributor's catalog
///
/// Implementations perform exactly one request per call; retrying is the
/// caller's decision.
pub trait PartSearchRepository {
    /// Searches the distributor for a manufacturer part number
    ///
    /// # Arguments
    /// * `context` - Run context carrying the access token and client id
    /// * `part_number` - The manufacturer part number used as keyword
    fn search(
        &self,
        context: &RunContext,
        part_number: &PartNumber,
    ) -> std::result::Result<PartSearchResult, SearchError>;
}
