/// One pricing tier: the unit price applies from `break_quantity` upward.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreak {
    pub break_quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl PriceBreak {
    pub fn new(break_quantity: u32, unit_price: f64, total_price: f64) -> Self {
        Self {
            break_quantity,
            unit_price,
            total_price,
        }
    }
}

/// A packaging option of a product (cut tape, reel, tray...) with its own
/// catalog number and price breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariation {
    pub digikey_part_number: Option<String>,
    pub package_type: String,
    pub minimum_order_quantity: Option<u32>,
    pub quantity_available: Option<u64>,
    pub price_breaks: Vec<PriceBreak>,
}

/// Parametric fields lifted out of the distributor's parameter list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartParameters {
    pub package_case: Option<String>,
    pub supplier_device_package: Option<String>,
    pub operating_temperature: Option<String>,
    pub size: Option<String>,
    pub height: Option<String>,
    pub thickness: Option<String>,
}

/// Distributor data for one product, normalized from the search response.
///
/// Every field is optional because the distributor omits fields freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDetails {
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_part_number: Option<String>,
    pub photo_url: Option<String>,
    pub datasheet_url: Option<String>,
    pub product_url: Option<String>,
    pub quantity_available: Option<u64>,
    pub lifecycle_status: Option<String>,
    pub end_of_life: Option<bool>,
    pub discontinued: Option<bool>,
    pub variations: Vec<ProductVariation>,
    pub parameters: PartParameters,
}

/// Normalized result of one keyword search.
///
/// `exact_matches` holds what the distributor flags as exact part-number
/// matches; `products` holds the ranked keyword results, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartSearchResult {
    pub exact_matches: Vec<PartDetails>,
    pub products: Vec<PartDetails>,
}

impl PartSearchResult {
    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.products.is_empty()
    }
}
