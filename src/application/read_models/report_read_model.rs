//! Report read model shared by every renderer
//!
//! All values the renderers print are pre-formatted here, so the CSV and
//! HTML outputs show identical data in identical order.

use serde::Serialize;

/// Main read model for a BOM report
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub summary: SummaryView,
    /// One row per BOM line item, in BOM order
    pub parts: Vec<PartRowView>,
    pub skipped_rows: Vec<SkippedRowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub total_items: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub skipped_rows: usize,
}

/// View of one resolved (or unresolved) line item
#[derive(Debug, Clone, Serialize)]
pub struct PartRowView {
    /// Row number in the BOM (1-based, header excluded)
    pub line: usize,
    pub designators: String,
    pub quantity: u32,
    pub requested_part_number: String,
    pub found: bool,
    /// "exact", "fuzzy", "ambiguous" or "none"
    pub match_kind: String,
    /// Two decimals, empty when nothing matched
    pub confidence: String,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_part_number: Option<String>,
    pub digikey_part_number: Option<String>,
    pub package_type: Option<String>,
    pub price_break_quantity: Option<u32>,
    pub unit_price: Option<String>,
    pub extended_price: Option<String>,
    pub stock: Option<u64>,
    pub lifecycle_status: Option<String>,
    pub end_of_life: Option<String>,
    pub discontinued: Option<String>,
    pub package_case: Option<String>,
    pub supplier_device_package: Option<String>,
    pub operating_temperature: Option<String>,
    pub size: Option<String>,
    pub height: Option<String>,
    pub thickness: Option<String>,
    pub photo_url: Option<String>,
    pub datasheet_url: Option<String>,
    pub product_url: Option<String>,
    pub note: Option<String>,
    pub variations: Vec<VariationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariationView {
    pub package_type: String,
    pub digikey_part_number: Option<String>,
    pub minimum_order_quantity: Option<u32>,
    pub quantity_available: Option<u64>,
    pub price_breaks: Vec<PriceBreakView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakView {
    pub break_quantity: u32,
    pub unit_price: String,
    pub total_price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRowView {
    pub line: usize,
    pub reason: String,
}
