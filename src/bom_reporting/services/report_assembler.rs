use crate::bom_reporting::domain::{ReportContext, ReportMetadata, ResolvedPart, SkippedRow};
use chrono::Utc;
use uuid::Uuid;

/// ReportAssembler service for building the report context
///
/// Pure aggregation: parts keep the order they are handed in, which is BOM
/// order because the resolver runs sequentially. An empty BOM yields an
/// empty context, not an error.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Generates run metadata with the current timestamp and a unique report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str, currency: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
            currency.to_string(),
        )
    }

    /// Generates run metadata for this tool, using the compile-time version
    pub fn generate_default_metadata(currency: &str) -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), currency)
    }

    pub fn assemble(
        metadata: ReportMetadata,
        parts: Vec<ResolvedPart>,
        skipped_rows: Vec<SkippedRow>,
    ) -> ReportContext {
        ReportContext::new(metadata, parts, skipped_rows)
    }
}
