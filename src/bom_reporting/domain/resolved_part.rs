use super::line_item::LineItem;
use super::part::PartDetails;

/// How the distributor product was matched to the BOM part number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Manufacturer part number matched exactly
    Exact,
    /// Top keyword result, with its confidence and whether it cleared
    /// the configured threshold
    Fuzzy { confidence: f64, accepted: bool },
    /// Nothing usable came back
    None,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy { accepted: true, .. } => "fuzzy",
            MatchKind::Fuzzy { accepted: false, .. } => "ambiguous",
            MatchKind::None => "none",
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            MatchKind::Exact => Some(1.0),
            MatchKind::Fuzzy { confidence, .. } => Some(*confidence),
            MatchKind::None => None,
        }
    }

    pub fn is_confident(&self) -> bool {
        matches!(
            self,
            MatchKind::Exact | MatchKind::Fuzzy { accepted: true, .. }
        )
    }
}

/// The price tier chosen for the requested quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPrice {
    pub package_type: String,
    pub digikey_part_number: Option<String>,
    pub break_quantity: u32,
    pub unit_price: f64,
    /// Unit price multiplied by the requested quantity
    pub extended_price: f64,
}

/// Normalized result of resolving one line item. One per line item, in
/// BOM order; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPart {
    line_item: LineItem,
    match_kind: MatchKind,
    details: Option<PartDetails>,
    selected_price: Option<SelectedPrice>,
    note: Option<String>,
}

impl ResolvedPart {
    /// A product came back. `found` follows the match kind: an ambiguous
    /// fuzzy match keeps its details for the reader but is not found.
    pub fn matched(
        line_item: LineItem,
        match_kind: MatchKind,
        details: PartDetails,
        selected_price: Option<SelectedPrice>,
        note: Option<String>,
    ) -> Self {
        Self {
            line_item,
            match_kind,
            details: Some(details),
            selected_price,
            note,
        }
    }

    /// No usable response: not found, rejected, or retries exhausted.
    pub fn unresolved(line_item: LineItem, note: impl Into<String>) -> Self {
        Self {
            line_item,
            match_kind: MatchKind::None,
            details: None,
            selected_price: None,
            note: Some(note.into()),
        }
    }

    pub fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    pub fn found(&self) -> bool {
        self.match_kind.is_confident() && self.details.is_some()
    }

    pub fn match_kind(&self) -> MatchKind {
        self.match_kind
    }

    pub fn details(&self) -> Option<&PartDetails> {
        self.details.as_ref()
    }

    pub fn selected_price(&self) -> Option<&SelectedPrice> {
        self.selected_price.as_ref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.details.as_ref()?.description.as_deref()
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.selected_price.as_ref().map(|p| p.unit_price)
    }

    pub fn stock(&self) -> Option<u64> {
        self.details.as_ref()?.quantity_available
    }

    pub fn lifecycle_status(&self) -> Option<&str> {
        self.details.as_ref()?.lifecycle_status.as_deref()
    }

    /// Distributor catalog number of the priced packaging option
    pub fn distributor_part_number(&self) -> Option<&str> {
        self.selected_price.as_ref()?.digikey_part_number.as_deref()
    }
}
