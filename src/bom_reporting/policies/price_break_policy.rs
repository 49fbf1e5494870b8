use crate::bom_reporting::domain::{PriceBreak, ProductVariation, SelectedPrice};

/// PriceBreakPolicy for choosing the pricing tier that applies to a quantity
///
/// Rules:
/// 1. The tier whose minimum quantity is the largest value not exceeding
///    the requested quantity
/// 2. If the requested quantity is below every tier, the lowest tier
///
/// Tiers do not need to arrive sorted.
pub struct PriceBreakPolicy;

impl PriceBreakPolicy {
    /// Selects the applicable price break, or None when there are no tiers
    pub fn select(price_breaks: &[PriceBreak], quantity: u32) -> Option<&PriceBreak> {
        price_breaks
            .iter()
            .filter(|tier| tier.break_quantity <= quantity)
            .max_by_key(|tier| tier.break_quantity)
            .or_else(|| price_breaks.iter().min_by_key(|tier| tier.break_quantity))
    }

    /// Prices a quantity against the first variation that has any tiers.
    ///
    /// Variations are expected in the distributor's order, with packaging
    /// already merged by `PackagingPolicy`.
    pub fn price_for(variations: &[ProductVariation], quantity: u32) -> Option<SelectedPrice> {
        variations.iter().find_map(|variation| {
            Self::select(&variation.price_breaks, quantity).map(|tier| SelectedPrice {
                package_type: variation.package_type.clone(),
                digikey_part_number: variation.digikey_part_number.clone(),
                break_quantity: tier.break_quantity,
                unit_price: tier.unit_price,
                extended_price: tier.unit_price * f64::from(quantity),
            })
        })
    }
}
