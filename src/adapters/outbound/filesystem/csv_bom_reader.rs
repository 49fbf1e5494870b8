use crate::bom_reporting::domain::{ColumnSchema, ColumnSpec, LineItem, PartNumber, SkippedRow};
use crate::ports::outbound::{BomReader, BomRow, BomRows};
use crate::shared::error::ReportError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Quantity used when the cell is missing or unparsable
const DEFAULT_QUANTITY: u32 = 1;

/// CsvBomReader adapter for comma-separated BOM exports
///
/// This adapter implements the BomReader port. The header row is matched
/// against the column schema once, when the file is opened; data rows are
/// parsed lazily as the iterator is consumed.
pub struct CsvBomReader;

impl CsvBomReader {
    pub fn new() -> Self {
        Self
    }

    /// Builds the row iterator over any reader. `path` is only used in
    /// error messages.
    pub fn rows_from_reader<R: Read + 'static>(
        source: R,
        path: &Path,
        schema: &ColumnSchema,
    ) -> Result<BomRows> {
        schema.validate()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| ReportError::MalformedBom {
                path: path.to_path_buf(),
                details: format!("Failed to read header row: {}", e),
            })?
            .clone();

        let columns = ColumnIndices::resolve(&headers, schema).map_err(|details| {
            ReportError::MalformedBom {
                path: path.to_path_buf(),
                details,
            }
        })?;

        Ok(Box::new(CsvBomRows {
            records: reader.into_records(),
            columns,
            row_number: 0,
        }))
    }
}

impl Default for CsvBomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for CsvBomReader {
    fn open(&self, path: &Path, schema: &ColumnSchema) -> Result<BomRows> {
        validate_input_file(path)?;

        let file = File::open(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::rows_from_reader(file, path, schema)
    }
}

/// Header positions of the schema's columns
#[derive(Debug, Clone)]
struct ColumnIndices {
    part_number: usize,
    quantity: Option<usize>,
    designators: Option<usize>,
    manufacturer: Option<usize>,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, schema: &ColumnSchema) -> std::result::Result<Self, String> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let find = |spec: &ColumnSpec| -> std::result::Result<Option<usize>, String> {
            let wanted = normalize_header(&spec.name);
            match normalized.iter().position(|h| *h == wanted) {
                Some(index) => Ok(Some(index)),
                None if spec.required => Err(format!(
                    "Required column '{}' not found in header row. Columns present: {}",
                    spec.name,
                    headers
                        .iter()
                        .map(|h| format!("'{}'", h.trim_start_matches('\u{feff}')))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                None => {
                    tracing::debug!(column = %spec.name, "optional BOM column not present");
                    Ok(None)
                }
            }
        };

        let part_number = find(&schema.part_number)?
            .ok_or_else(|| format!("Required column '{}' not found", schema.part_number.name))?;

        Ok(Self {
            part_number,
            quantity: find(&schema.quantity)?,
            designators: find(&schema.designators)?,
            manufacturer: find(&schema.manufacturer)?,
        })
    }

    fn cell<'r>(record: &'r StringRecord, index: Option<usize>) -> Option<&'r str> {
        index
            .and_then(|i| record.get(i))
            .filter(|value| !value.is_empty())
    }

    fn parse_row(&self, row_number: usize, record: &StringRecord) -> BomRow {
        let raw_part_number = record.get(self.part_number).unwrap_or("");
        let part_number = PartNumber::new(raw_part_number)
            .map_err(|e| SkippedRow::new(row_number, format!("Invalid part number: {}", e)))?;

        let quantity = match Self::cell(record, self.quantity) {
            Some(raw) => parse_quantity(raw).unwrap_or_else(|| {
                tracing::warn!(
                    row = row_number,
                    value = raw,
                    "unparsable quantity, defaulting to {}",
                    DEFAULT_QUANTITY
                );
                DEFAULT_QUANTITY
            }),
            None => DEFAULT_QUANTITY,
        };

        let designators = Self::cell(record, self.designators)
            .map(split_designators)
            .unwrap_or_default();
        let manufacturer = Self::cell(record, self.manufacturer).map(str::to_string);

        LineItem::new(row_number, part_number, quantity, designators, manufacturer)
            .map_err(|e| SkippedRow::new(row_number, e.to_string()))
    }
}

struct CsvBomRows<R> {
    records: csv::StringRecordsIntoIter<R>,
    columns: ColumnIndices,
    row_number: usize,
}

impl<R: Read> Iterator for CsvBomRows<R> {
    type Item = BomRow;

    fn next(&mut self) -> Option<BomRow> {
        let record = self.records.next()?;
        self.row_number += 1;

        Some(match record {
            Ok(record) => self.columns.parse_row(self.row_number, &record),
            Err(e) => Err(SkippedRow::new(
                self.row_number,
                format!("Unreadable row: {}", e),
            )),
        })
    }
}

/// Case-insensitive header key; tolerates a UTF-8 byte-order mark
fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Positive integer quantity; whole decimals such as "10.0" are accepted
fn parse_quantity(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(quantity) = raw.parse::<u32>() {
        return (quantity > 0).then_some(quantity);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Splits "R1, R2 R3;R4" into individual reference designators
fn split_designators(raw: &str) -> Vec<String> {
    raw.split([',', ';', ' '])
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}
