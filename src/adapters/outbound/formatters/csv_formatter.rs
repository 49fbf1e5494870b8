use crate::application::read_models::{PartRowView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Fixed column order of the CSV report
pub const CSV_COLUMNS: [&str; 29] = [
    "Line",
    "Designators",
    "Quantity",
    "Requested MPN",
    "Found",
    "Match",
    "Confidence",
    "Description",
    "Manufacturer",
    "Manufacturer Part Number",
    "DigiKey Part Number",
    "Package Type",
    "Price Break Qty",
    "Unit Price",
    "Extended Price",
    "Currency",
    "Stock",
    "Lifecycle Status",
    "End of Life",
    "Discontinued",
    "Package / Case",
    "Supplier Device Package",
    "Operating Temperature",
    "Size",
    "Height",
    "Thickness",
    "Datasheet",
    "Product URL",
    "Note",
];

/// CsvReportFormatter adapter for spreadsheet-friendly output
///
/// This adapter implements the ReportFormatter port. One record per part,
/// in BOM order, under a single header row. Quoting is left to the csv
/// writer, so commas in descriptions or designator lists are safe.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn record(part: &PartRowView, currency: &str) -> [String; 29] {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();

        [
            part.line.to_string(),
            part.designators.clone(),
            part.quantity.to_string(),
            part.requested_part_number.clone(),
            if part.found { "Yes" } else { "No" }.to_string(),
            part.match_kind.clone(),
            part.confidence.clone(),
            opt(&part.description),
            opt(&part.manufacturer),
            opt(&part.manufacturer_part_number),
            opt(&part.digikey_part_number),
            opt(&part.package_type),
            part.price_break_quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            opt(&part.unit_price),
            opt(&part.extended_price),
            if part.unit_price.is_some() {
                currency.to_string()
            } else {
                String::new()
            },
            part.stock.map(|s| s.to_string()).unwrap_or_default(),
            opt(&part.lifecycle_status),
            opt(&part.end_of_life),
            opt(&part.discontinued),
            opt(&part.package_case),
            opt(&part.supplier_device_package),
            opt(&part.operating_temperature),
            opt(&part.size),
            opt(&part.height),
            opt(&part.thickness),
            opt(&part.datasheet_url),
            opt(&part.product_url),
            opt(&part.note),
        ]
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let render_error = |details: String| ReportError::Render {
            details,
            hint: "This is an internal error; please report it".to_string(),
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(CSV_COLUMNS)
            .map_err(|e| render_error(e.to_string()))?;

        for part in &model.parts {
            writer
                .write_record(Self::record(part, &model.metadata.currency))
                .map_err(|e| render_error(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| render_error(e.to_string()))?;
        let output = String::from_utf8(bytes).map_err(|e| render_error(e.to_string()))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, SummaryView};

    fn row(line: usize, mpn: &str, found: bool) -> PartRowView {
        PartRowView {
            line,
            designators: "C1, C2".to_string(),
            quantity: 2,
            requested_part_number: mpn.to_string(),
            found,
            match_kind: if found { "exact" } else { "none" }.to_string(),
            confidence: if found { "1.00" } else { "" }.to_string(),
            description: found.then(|| "CAP CER 0.1UF 50V X7R 0603".to_string()),
            manufacturer: None,
            manufacturer_part_number: None,
            digikey_part_number: None,
            package_type: None,
            price_break_quantity: found.then_some(1),
            unit_price: found.then(|| "0.10".to_string()),
            extended_price: found.then(|| "0.20".to_string()),
            stock: None,
            lifecycle_status: None,
            end_of_life: None,
            discontinued: None,
            package_case: None,
            supplier_device_package: None,
            operating_temperature: Some("-55°C ~ 125°C".to_string()),
            size: None,
            height: None,
            thickness: None,
            photo_url: None,
            datasheet_url: None,
            product_url: None,
            note: (!found).then(|| "No matching product found at DigiKey".to_string()),
            variations: vec![],
        }
    }

    fn model(parts: Vec<PartRowView>) -> ReportReadModel {
        ReportReadModel {
            metadata: ReportMetadataView {
                generated_at: "2024-01-15T10:30:00+00:00".to_string(),
                tool_name: "digikey-bom-report".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:1".to_string(),
                currency: "EUR".to_string(),
            },
            summary: SummaryView {
                total_items: parts.len(),
                resolved: parts.iter().filter(|p| p.found).count(),
                unresolved: parts.iter().filter(|p| !p.found).count(),
                skipped_rows: 0,
            },
            parts,
            skipped_rows: vec![],
        }
    }

    #[test]
    fn test_header_and_rows_in_order() {
        let output = CsvReportFormatter::new()
            .format(&model(vec![row(1, "GRM188R71H104KA93D", true), row(2, "NOPE", false)]))
            .unwrap();

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CSV_COLUMNS);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][1], "C1, C2");
        assert_eq!(&records[0][3], "GRM188R71H104KA93D");
        assert_eq!(&records[0][4], "Yes");
        assert_eq!(&records[0][13], "0.10");
        assert_eq!(&records[0][15], "EUR");
        assert_eq!(&records[0][22], "-55°C ~ 125°C");
        assert_eq!(&records[1][4], "No");
        assert_eq!(&records[1][15], "");
        assert_eq!(&records[1][28], "No matching product found at DigiKey");
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let output = CsvReportFormatter::new().format(&model(vec![])).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("Line,Designators,Quantity,Requested MPN"));
    }
}
