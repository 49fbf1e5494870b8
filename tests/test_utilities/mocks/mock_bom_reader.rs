use digikey_bom_report::ports::outbound::{BomRow, BomRows};
use digikey_bom_report::prelude::*;
use std::path::Path;

/// Mock BomReader serving in-memory rows, numbered from 1
#[derive(Clone, Default)]
pub struct MockBomReader {
    rows: Vec<BomRow>,
}

impl MockBomReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line item per part number, quantity 1; blank part numbers
    /// become skipped rows the way the CSV reader reports them
    pub fn with_part_numbers(part_numbers: &[&str]) -> Self {
        let rows = part_numbers
            .iter()
            .enumerate()
            .map(|(i, mpn)| match PartNumber::new(mpn) {
                Ok(pn) => Ok(LineItem::new(i + 1, pn, 1, vec![], None).unwrap()),
                Err(e) => Err(SkippedRow::new(i + 1, format!("Invalid part number: {}", e))),
            })
            .collect();
        Self { rows }
    }
}

impl BomReader for MockBomReader {
    fn open(&self, _path: &Path, _schema: &ColumnSchema) -> Result<BomRows> {
        Ok(Box::new(self.rows.clone().into_iter()))
    }
}
