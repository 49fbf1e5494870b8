//! Wire types for the DigiKey Product Information v4 API and their
//! mapping onto the domain.
//!
//! Every field is optional: the API omits or nulls fields freely, and a
//! missing field must never fail a part.

use crate::bom_reporting::domain::{
    PartDetails, PartParameters, PartSearchResult, PriceBreak, ProductVariation,
};
use crate::bom_reporting::policies::PackagingPolicy;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/oauth2/token`
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub token_type: Option<String>,
}

/// Body of `POST /products/v4/search/keyword`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct KeywordSearchRequest<'a> {
    pub keywords: &'a str,
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct KeywordSearchResponse {
    #[serde(default)]
    pub products: Option<Vec<DkProduct>>,
    #[serde(default)]
    pub exact_matches: Option<Vec<DkProduct>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkProduct {
    #[serde(default)]
    pub description: Option<DkDescription>,
    #[serde(default)]
    pub manufacturer: Option<DkManufacturer>,
    #[serde(default)]
    pub manufacturer_product_number: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub datasheet_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub quantity_available: Option<u64>,
    #[serde(default)]
    pub product_status: Option<DkProductStatus>,
    #[serde(default)]
    pub end_of_life: Option<bool>,
    #[serde(default)]
    pub discontinued: Option<bool>,
    #[serde(default)]
    pub product_variations: Option<Vec<DkProductVariation>>,
    #[serde(default)]
    pub parameters: Option<Vec<DkParameter>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkDescription {
    #[serde(default)]
    pub product_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkManufacturer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkProductStatus {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkProductVariation {
    #[serde(default)]
    pub digi_key_product_number: Option<String>,
    #[serde(default)]
    pub package_type: Option<DkPackageType>,
    #[serde(default)]
    pub standard_pricing: Option<Vec<DkPriceBreak>>,
    #[serde(default)]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default, rename = "QuantityAvailableforPackageType")]
    pub quantity_available_for_package_type: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkPackageType {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkPriceBreak {
    #[serde(default)]
    pub break_quantity: Option<u32>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkParameter {
    #[serde(default)]
    pub parameter_text: Option<String>,
    #[serde(default)]
    pub value_text: Option<String>,
}

/// DigiKey error envelope, used only to enrich error messages
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DkErrorResponse {
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

impl From<KeywordSearchResponse> for PartSearchResult {
    fn from(response: KeywordSearchResponse) -> Self {
        let convert = |products: Option<Vec<DkProduct>>| -> Vec<PartDetails> {
            products
                .unwrap_or_default()
                .into_iter()
                .map(PartDetails::from)
                .collect()
        };

        PartSearchResult {
            exact_matches: convert(response.exact_matches),
            products: convert(response.products),
        }
    }
}

impl From<DkProduct> for PartDetails {
    fn from(product: DkProduct) -> Self {
        let variations = product
            .product_variations
            .unwrap_or_default()
            .into_iter()
            .map(ProductVariation::from)
            .collect();

        PartDetails {
            description: product.description.and_then(|d| d.product_description),
            manufacturer: product.manufacturer.and_then(|m| m.name),
            manufacturer_part_number: product.manufacturer_product_number,
            photo_url: product.photo_url,
            datasheet_url: product.datasheet_url,
            product_url: product.product_url,
            quantity_available: product.quantity_available,
            lifecycle_status: product.product_status.and_then(|s| s.status),
            end_of_life: product.end_of_life,
            discontinued: product.discontinued,
            variations: PackagingPolicy::merge_cut_tape_and_digi_reel(variations),
            parameters: extract_parameters(product.parameters.unwrap_or_default()),
        }
    }
}

impl From<DkProductVariation> for ProductVariation {
    fn from(variation: DkProductVariation) -> Self {
        let price_breaks = variation
            .standard_pricing
            .unwrap_or_default()
            .into_iter()
            .filter_map(|price| {
                Some(PriceBreak::new(
                    price.break_quantity?,
                    price.unit_price?,
                    price.total_price.unwrap_or_default(),
                ))
            })
            .collect();

        ProductVariation {
            digikey_part_number: variation.digi_key_product_number,
            package_type: variation
                .package_type
                .and_then(|p| p.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            minimum_order_quantity: variation.minimum_order_quantity,
            quantity_available: variation.quantity_available_for_package_type,
            price_breaks,
        }
    }
}

/// Lifts the parameters the report shows out of the parameter list.
///
/// Package, device package and temperature match by exact name; size,
/// height and thickness by substring because their names vary by category
/// ("Size / Dimension", "Height - Seated (Max)").
fn extract_parameters(parameters: Vec<DkParameter>) -> PartParameters {
    let mut extracted = PartParameters::default();

    for parameter in parameters {
        let (Some(name), Some(value)) = (parameter.parameter_text, parameter.value_text) else {
            continue;
        };

        if name == "Package / Case" {
            extracted.package_case = Some(value.clone());
        }
        if name == "Supplier Device Package" {
            extracted.supplier_device_package = Some(value.clone());
        }
        if name == "Operating Temperature" {
            extracted.operating_temperature = Some(value.clone());
        }
        if name.contains("Size") {
            extracted.size = Some(value.clone());
        }
        if name.contains("Height") {
            extracted.height = Some(value.clone());
        }
        if name.contains("Thickness") {
            extracted.thickness = Some(value);
        }
    }

    extracted
}
