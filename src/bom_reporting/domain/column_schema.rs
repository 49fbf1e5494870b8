use crate::shared::error::ReportError;
use crate::shared::Result;

/// Default column names, as written by Altium Designer's BOM export
pub const DEFAULT_PART_NUMBER_COLUMN: &str = "Manufacturer Part Number";
pub const DEFAULT_QUANTITY_COLUMN: &str = "Quantity";
pub const DEFAULT_DESIGNATOR_COLUMN: &str = "Designator";
pub const DEFAULT_MANUFACTURER_COLUMN: &str = "Manufacturer";

/// One named column of the BOM and whether the file must contain it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub required: bool,
}

impl ColumnSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// Column mapping for a BOM file
///
/// BOM exporters disagree on column names, so every column is looked up by
/// a configurable name. The part number column is always required; the
/// others fall back to defaults (quantity 1, no designators).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub part_number: ColumnSpec,
    pub quantity: ColumnSpec,
    pub designators: ColumnSpec,
    pub manufacturer: ColumnSpec,
}

impl ColumnSchema {
    /// Validates that every column has a usable name
    pub fn validate(&self) -> Result<()> {
        for spec in self.columns() {
            if spec.name.trim().is_empty() {
                return Err(ReportError::Validation {
                    message: "BOM column names must not be empty".to_string(),
                }
                .into());
            }
        }
        if !self.part_number.required {
            return Err(ReportError::Validation {
                message: "The part number column cannot be optional".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn columns(&self) -> [&ColumnSpec; 4] {
        [
            &self.part_number,
            &self.quantity,
            &self.designators,
            &self.manufacturer,
        ]
    }

    pub fn with_part_number_column(mut self, name: impl Into<String>) -> Self {
        self.part_number.name = name.into();
        self
    }

    pub fn with_quantity_column(mut self, name: impl Into<String>) -> Self {
        self.quantity.name = name.into();
        self
    }

    pub fn with_designator_column(mut self, name: impl Into<String>) -> Self {
        self.designators.name = name.into();
        self
    }

    pub fn with_manufacturer_column(mut self, name: impl Into<String>) -> Self {
        self.manufacturer.name = name.into();
        self
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            part_number: ColumnSpec::required(DEFAULT_PART_NUMBER_COLUMN),
            quantity: ColumnSpec::optional(DEFAULT_QUANTITY_COLUMN),
            designators: ColumnSpec::optional(DEFAULT_DESIGNATOR_COLUMN),
            manufacturer: ColumnSpec::optional(DEFAULT_MANUFACTURER_COLUMN),
        }
    }
}
