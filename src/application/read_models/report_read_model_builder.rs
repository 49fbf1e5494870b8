//! Builder for constructing ReportReadModel from the report context

use super::report_read_model::{
    PartRowView, PriceBreakView, ReportMetadataView, ReportReadModel, SkippedRowView,
    SummaryView, VariationView,
};
use crate::bom_reporting::domain::{
    PartDetails, ProductVariation, ReportContext, ReportMetadata, ResolvedPart,
};

/// Builder for constructing ReportReadModel from domain objects
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(context: &ReportContext) -> ReportReadModel {
        ReportReadModel {
            metadata: Self::build_metadata(context.metadata()),
            summary: SummaryView {
                total_items: context.total_items(),
                resolved: context.resolved_count(),
                unresolved: context.unresolved_count(),
                skipped_rows: context.skipped_rows().len(),
            },
            parts: context.parts().iter().map(Self::build_part).collect(),
            skipped_rows: context
                .skipped_rows()
                .iter()
                .map(|row| SkippedRowView {
                    line: row.row_number,
                    reason: row.reason.clone(),
                })
                .collect(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
            currency: metadata.currency().to_string(),
        }
    }

    fn build_part(part: &ResolvedPart) -> PartRowView {
        let item = part.line_item();
        let details = part.details();
        let price = part.selected_price();
        let field = |get: fn(&PartDetails) -> Option<&String>| details.and_then(get).cloned();

        PartRowView {
            line: item.row_number(),
            designators: item.designators().join(", "),
            quantity: item.quantity(),
            requested_part_number: item.part_number().to_string(),
            found: part.found(),
            match_kind: part.match_kind().label().to_string(),
            confidence: part
                .match_kind()
                .confidence()
                .map(|c| format!("{:.2}", c))
                .unwrap_or_default(),
            description: part.description().map(str::to_string),
            manufacturer: field(|d| d.manufacturer.as_ref()),
            manufacturer_part_number: field(|d| d.manufacturer_part_number.as_ref()),
            digikey_part_number: part.distributor_part_number().map(str::to_string),
            package_type: price.map(|p| p.package_type.clone()),
            price_break_quantity: price.map(|p| p.break_quantity),
            unit_price: part.unit_price().map(format_unit_price),
            extended_price: price.map(|p| format!("{:.2}", p.extended_price)),
            stock: part.stock(),
            lifecycle_status: part.lifecycle_status().map(str::to_string),
            end_of_life: details.and_then(|d| d.end_of_life).map(yes_no),
            discontinued: details.and_then(|d| d.discontinued).map(yes_no),
            package_case: field(|d| d.parameters.package_case.as_ref()),
            supplier_device_package: field(|d| d.parameters.supplier_device_package.as_ref()),
            operating_temperature: field(|d| d.parameters.operating_temperature.as_ref()),
            size: field(|d| d.parameters.size.as_ref()),
            height: field(|d| d.parameters.height.as_ref()),
            thickness: field(|d| d.parameters.thickness.as_ref()),
            photo_url: field(|d| d.photo_url.as_ref()),
            datasheet_url: field(|d| d.datasheet_url.as_ref()),
            product_url: field(|d| d.product_url.as_ref()),
            note: part.note().map(str::to_string),
            variations: details
                .map(|d| d.variations.iter().map(Self::build_variation).collect())
                .unwrap_or_default(),
        }
    }

    fn build_variation(variation: &ProductVariation) -> VariationView {
        VariationView {
            package_type: variation.package_type.clone(),
            digikey_part_number: variation.digikey_part_number.clone(),
            minimum_order_quantity: variation.minimum_order_quantity,
            quantity_available: variation.quantity_available,
            price_breaks: variation
                .price_breaks
                .iter()
                .map(|tier| PriceBreakView {
                    break_quantity: tier.break_quantity,
                    unit_price: format_unit_price(tier.unit_price),
                    total_price: format!("{:.2}", tier.total_price),
                })
                .collect(),
        }
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Unit prices keep up to five decimals (sub-cent passives) but never
/// fewer than two.
fn format_unit_price(price: f64) -> String {
    let formatted = format!("{:.5}", price);
    let trimmed = formatted.trim_end_matches('0');
    let decimals = trimmed.split('.').nth(1).map_or(0, str::len);
    if decimals >= 2 {
        trimmed.to_string()
    } else {
        format!("{:.2}", price)
    }
}
