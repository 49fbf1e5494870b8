use super::line_item::SkippedRow;
use super::resolved_part::ResolvedPart;

/// ReportMetadata value object: run-level facts printed in the report header
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
    currency: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        report_id: String,
        currency: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            report_id,
            currency,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Everything one render needs: the resolved parts in BOM order plus the
/// run-level counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    metadata: ReportMetadata,
    parts: Vec<ResolvedPart>,
    skipped_rows: Vec<SkippedRow>,
    unresolved_count: usize,
}

impl ReportContext {
    pub fn new(
        metadata: ReportMetadata,
        parts: Vec<ResolvedPart>,
        skipped_rows: Vec<SkippedRow>,
    ) -> Self {
        let unresolved_count = parts.iter().filter(|p| !p.found()).count();
        Self {
            metadata,
            parts,
            skipped_rows,
            unresolved_count,
        }
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    pub fn parts(&self) -> &[ResolvedPart] {
        &self.parts
    }

    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped_rows
    }

    pub fn total_items(&self) -> usize {
        self.parts.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved_count
    }

    pub fn resolved_count(&self) -> usize {
        self.parts.len() - self.unresolved_count
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
