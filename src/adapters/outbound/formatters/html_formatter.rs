use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ReportError;
use crate::shared::Result;
use handlebars::Handlebars;
use std::fs;
use std::path::Path;

const TEMPLATE_NAME: &str = "report";

/// Template compiled into the binary, used unless one is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../../templates/report.html.hbs");

/// HtmlReportFormatter adapter for the self-contained HTML report
///
/// This adapter implements the ReportFormatter port with a Handlebars
/// template. Every value is HTML-escaped by the engine; the template is
/// compiled once, when the formatter is built.
pub struct HtmlReportFormatter {
    handlebars: Handlebars<'static>,
}

impl HtmlReportFormatter {
    /// Formatter using the built-in template
    pub fn new() -> Result<Self> {
        Self::from_template_str(DEFAULT_TEMPLATE)
    }

    /// Formatter using a template file from disk
    ///
    /// # Errors
    /// `ReportError::Render` when the file is missing, unreadable or not a
    /// valid template
    pub fn with_template_file(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path).map_err(|e| ReportError::Render {
            details: format!("Cannot read template {}: {}", path.display(), e),
            hint: "Check template_path / --template, or omit it to use the built-in template"
                .to_string(),
        })?;
        Self::from_template_str(&template)
    }

    pub fn from_template_str(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| ReportError::Render {
                details: format!("Invalid report template: {}", e),
                hint: "Fix the Handlebars syntax in the report template".to_string(),
            })?;
        Ok(Self { handlebars })
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let html = self
            .handlebars
            .render(TEMPLATE_NAME, model)
            .map_err(|e| ReportError::Render {
                details: e.to_string(),
                hint: "Check that the template only references fields of the report model"
                    .to_string(),
            })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        PartRowView, PriceBreakView, ReportMetadataView, SkippedRowView, SummaryView,
        VariationView,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn part(line: usize, mpn: &str, description: &str) -> PartRowView {
        PartRowView {
            line,
            designators: "U1".to_string(),
            quantity: 1,
            requested_part_number: mpn.to_string(),
            found: true,
            match_kind: "exact".to_string(),
            confidence: "1.00".to_string(),
            description: Some(description.to_string()),
            manufacturer: Some("Texas Instruments".to_string()),
            manufacturer_part_number: Some(mpn.to_string()),
            digikey_part_number: Some("296-1411-5-ND".to_string()),
            package_type: Some("Tube".to_string()),
            price_break_quantity: Some(1),
            unit_price: Some("0.46".to_string()),
            extended_price: Some("0.46".to_string()),
            stock: Some(61842),
            lifecycle_status: Some("Active".to_string()),
            end_of_life: Some("No".to_string()),
            discontinued: Some("No".to_string()),
            package_case: Some("8-DIP".to_string()),
            supplier_device_package: None,
            operating_temperature: None,
            size: None,
            height: None,
            thickness: None,
            photo_url: Some("https://mm.digikey.com/ne555p.jpg".to_string()),
            datasheet_url: Some("https://www.ti.com/lit/ds/symlink/ne555.pdf".to_string()),
            product_url: None,
            note: None,
            variations: vec![VariationView {
                package_type: "Tube".to_string(),
                digikey_part_number: Some("296-1411-5-ND".to_string()),
                minimum_order_quantity: Some(1),
                quantity_available: Some(61842),
                price_breaks: vec![PriceBreakView {
                    break_quantity: 10,
                    unit_price: "0.337".to_string(),
                    total_price: "3.37".to_string(),
                }],
            }],
        }
    }

    fn model(parts: Vec<PartRowView>) -> ReportReadModel {
        ReportReadModel {
            metadata: ReportMetadataView {
                generated_at: "2024-01-15T10:30:00+00:00".to_string(),
                tool_name: "digikey-bom-report".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:1".to_string(),
                currency: "USD".to_string(),
            },
            summary: SummaryView {
                total_items: parts.len(),
                resolved: parts.len(),
                unresolved: 0,
                skipped_rows: 1,
            },
            parts,
            skipped_rows: vec![SkippedRowView {
                line: 3,
                reason: "Invalid part number: Part number cannot be empty".to_string(),
            }],
        }
    }

    #[test]
    fn test_renders_parts_in_order() {
        let html = HtmlReportFormatter::new()
            .unwrap()
            .format(&model(vec![
                part(1, "NE555P", "IC OSC SINGLE TIMER"),
                part(2, "LM358N", "IC OPAMP GP 2 CIRCUIT"),
            ]))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        let first = html.find("NE555P").unwrap();
        let second = html.find("LM358N").unwrap();
        assert!(first < second);
        assert!(html.contains("0.46 USD"));
        assert!(html.contains("0.337"));
        assert!(html.contains("ne555.pdf"));
        assert!(html.contains("Row 3: Invalid part number"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = HtmlReportFormatter::new()
            .unwrap()
            .format(&model(vec![part(1, "X<script>", "A & B")]))
            .unwrap();

        assert!(!html.contains("X<script>"));
        assert!(html.contains("X&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_empty_report() {
        let html = HtmlReportFormatter::new()
            .unwrap()
            .format(&model(vec![]))
            .unwrap();
        assert!(html.contains("The BOM contained no line items."));
    }

    #[test]
    fn test_custom_template_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{{{{#each parts}}}}{{{{line}}}}:{{{{requested_part_number}}}};{{{{/each}}}}"
        )
        .unwrap();

        let formatter = HtmlReportFormatter::with_template_file(file.path()).unwrap();
        let output = formatter
            .format(&model(vec![part(1, "NE555P", "d"), part(2, "LM358N", "d")]))
            .unwrap();
        assert_eq!(output, "1:NE555P;2:LM358N;");
    }

    #[test]
    fn test_missing_template_file_is_render_error() {
        let err = HtmlReportFormatter::with_template_file(Path::new("/nonexistent/report.hbs"))
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Render { .. })
        ));
    }

    #[test]
    fn test_invalid_template_is_render_error() {
        let err = HtmlReportFormatter::from_template_str("{{#each parts}}unclosed")
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid report template"));
    }
}
