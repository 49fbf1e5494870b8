use crate::shared::Result;

/// Maximum length for manufacturer part numbers (security limit)
const MAX_PART_NUMBER_LENGTH: usize = 128;

/// NewType wrapper for a manufacturer part number with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartNumber(String);

impl PartNumber {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            anyhow::bail!("Part number cannot be empty");
        }

        if trimmed.len() > MAX_PART_NUMBER_LENGTH {
            anyhow::bail!(
                "Part number is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_PART_NUMBER_LENGTH
            );
        }

        // Part numbers legitimately contain '/', '#', ',' and spaces,
        // so only control characters are rejected.
        if trimmed.chars().any(char::is_control) {
            anyhow::bail!("Part number contains control characters");
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for exact-match detection
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for PartNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One BOM row: a distinct part and the quantity the build needs.
///
/// Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    row_number: usize,
    part_number: PartNumber,
    quantity: u32,
    designators: Vec<String>,
    manufacturer: Option<String>,
}

impl LineItem {
    /// Quantity must be positive; zero is rejected.
    pub fn new(
        row_number: usize,
        part_number: PartNumber,
        quantity: u32,
        designators: Vec<String>,
        manufacturer: Option<String>,
    ) -> Result<Self> {
        if quantity == 0 {
            anyhow::bail!("Quantity must be a positive integer");
        }

        Ok(Self {
            row_number,
            part_number,
            quantity,
            designators,
            manufacturer,
        })
    }

    /// 1-based data row number in the source file (header excluded)
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn part_number(&self) -> &PartNumber {
        &self.part_number
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn designators(&self) -> &[String] {
        &self.designators
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }
}

/// A BOM row the reader dropped, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: String,
}

impl SkippedRow {
    pub fn new(row_number: usize, reason: impl Into<String>) -> Self {
        Self {
            row_number,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_number_trims_whitespace() {
        let pn = PartNumber::new("  RC0603FR-0710KL ").unwrap();
        assert_eq!(pn.as_str(), "RC0603FR-0710KL");
    }

    #[test]
    fn test_part_number_empty() {
        assert!(PartNumber::new("").is_err());
        assert!(PartNumber::new("   ").is_err());
    }

    #[test]
    fn test_part_number_allows_punctuation() {
        let pn = PartNumber::new("LM358DR2G/NOPB #PBF").unwrap();
        assert_eq!(pn.to_string(), "LM358DR2G/NOPB #PBF");
    }

    #[test]
    fn test_part_number_rejects_control_characters() {
        assert!(PartNumber::new("ABC\u{0007}").is_err());
    }

    #[test]
    fn test_part_number_too_long() {
        let long = "A".repeat(MAX_PART_NUMBER_LENGTH + 1);
        assert!(PartNumber::new(&long).is_err());
    }

    #[test]
    fn test_part_number_matches_case_insensitive() {
        let pn = PartNumber::new("stm32f103c8t6").unwrap();
        assert!(pn.matches("STM32F103C8T6"));
        assert!(!pn.matches("STM32F103C8T7"));
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let pn = PartNumber::new("NE555P").unwrap();
        assert!(LineItem::new(1, pn, 0, vec![], None).is_err());
    }

    #[test]
    fn test_line_item_accessors() {
        let pn = PartNumber::new("NE555P").unwrap();
        let item = LineItem::new(
            3,
            pn,
            2,
            vec!["U1".to_string(), "U2".to_string()],
            Some("Texas Instruments".to_string()),
        )
        .unwrap();

        assert_eq!(item.row_number(), 3);
        assert_eq!(item.part_number().as_str(), "NE555P");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.designators(), ["U1", "U2"]);
        assert_eq!(item.manufacturer(), Some("Texas Instruments"));
    }
}
