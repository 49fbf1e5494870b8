use crate::bom_reporting::domain::{ColumnSchema, LineItem, SkippedRow};
use crate::shared::Result;
use std::path::Path;

/// One BOM data row: a line item, or the reason the row was skipped
pub type BomRow = std::result::Result<LineItem, SkippedRow>;

/// Lazy, file-ordered sequence of BOM rows
pub type BomRows = Box<dyn Iterator<Item = BomRow>>;

/// BomReader port for reading line items from a BOM file
///
/// This port abstracts the tabular file format and the column mapping.
pub trait BomReader {
    /// Opens a BOM file and resolves the column schema against its header.
    ///
    /// Rows are parsed lazily as the returned iterator is consumed. A row
    /// without a usable part number is yielded as `Err(SkippedRow)` rather
    /// than aborting the read.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - A required column is absent from the header row
    ///   (`ReportError::MalformedBom`)
    fn open(&self, path: &Path, schema: &ColumnSchema) -> Result<BomRows>;
}
