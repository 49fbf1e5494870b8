use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::services::PartResolver;
use crate::bom_reporting::domain::{LineItem, ResolvedPart, RunContext, SkippedRow};
use crate::bom_reporting::policies::{MatchPolicy, RetryPolicy};
use crate::bom_reporting::services::ReportAssembler;
use crate::ports::outbound::{
    BomReader, BomRows, CredentialExchange, PartSearchRepository, ProgressReporter,
};
use crate::shared::Result;
use chrono::Utc;

/// GenerateReportUseCase - Core use case for BOM report generation
///
/// Runs the pipeline Reader → Resolver → Assembler using generic
/// dependency injection for all infrastructure dependencies. The BOM is
/// opened before the credential exchange so a malformed file fails
/// without touching the network.
///
/// # Type Parameters
/// * `BR` - BomReader implementation
/// * `CE` - CredentialExchange implementation
/// * `PS` - PartSearchRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<BR, CE, PS, PR> {
    bom_reader: BR,
    credential_exchange: CE,
    part_resolver: PartResolver<PS>,
    progress_reporter: PR,
}

impl<BR, CE, PS, PR> GenerateReportUseCase<BR, CE, PS, PR>
where
    BR: BomReader,
    CE: CredentialExchange,
    PS: PartSearchRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        bom_reader: BR,
        credential_exchange: CE,
        part_search: PS,
        progress_reporter: PR,
        match_policy: MatchPolicy,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            bom_reader,
            credential_exchange,
            part_resolver: PartResolver::new(part_search, match_policy, retry_policy),
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Fatal conditions only: the BOM cannot be opened or lacks a required
    /// column, or the credential exchange fails. Per-part failures are
    /// recorded in the returned context instead.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Open the BOM (header validated here)
        let rows = self.open_bom(&request)?;

        // Step 2: Exchange credentials for the run's access token
        let run_context = self.authenticate(&request)?;

        // Step 3: Split valid line items from skipped rows
        let (items, skipped_rows) = self.collect_rows(rows);

        // Step 4: Resolve every line item, in BOM order
        let parts = self.resolve_parts(&run_context, items);

        // Step 5: Assemble the report context
        let metadata = ReportAssembler::generate_default_metadata(&request.currency);
        let context = ReportAssembler::assemble(metadata, parts, skipped_rows);

        self.progress_reporter.report_completion(&format!(
            "Resolved {} of {} part(s) ({} unresolved, {} row(s) skipped)",
            context.resolved_count(),
            context.total_items(),
            context.unresolved_count(),
            context.skipped_rows().len()
        ));

        Ok(ReportResponse::new(context))
    }

    fn open_bom(&self, request: &ReportRequest) -> Result<BomRows> {
        self.progress_reporter.report(&format!(
            "📖 Reading BOM file: {}",
            request.bom_path.display()
        ));
        self.bom_reader
            .open(&request.bom_path, &request.column_schema)
    }

    fn authenticate(&self, request: &ReportRequest) -> Result<RunContext> {
        self.progress_reporter
            .report("🔑 Authenticating with the DigiKey API...");

        let token = self.credential_exchange.exchange(&request.credentials)?;
        Ok(RunContext::new(token, request.credentials.client_id()))
    }

    fn collect_rows(&self, rows: BomRows) -> (Vec<LineItem>, Vec<SkippedRow>) {
        let mut items = Vec::new();
        let mut skipped_rows = Vec::new();

        for row in rows {
            match row {
                Ok(item) => items.push(item),
                Err(skipped) => {
                    self.progress_reporter.report_warning(&format!(
                        "Skipping BOM row {}: {}",
                        skipped.row_number, skipped.reason
                    ));
                    skipped_rows.push(skipped);
                }
            }
        }

        self.progress_reporter
            .report(&format!("✅ Found {} line item(s)", items.len()));
        (items, skipped_rows)
    }

    fn resolve_parts(&self, run_context: &RunContext, items: Vec<LineItem>) -> Vec<ResolvedPart> {
        let total = items.len();
        let mut parts = Vec::with_capacity(total);
        let mut expiry_reported = false;

        for (index, item) in items.into_iter().enumerate() {
            if !expiry_reported && run_context.access_token().is_expired_at(Utc::now()) {
                tracing::warn!("access token expired mid-run; remaining searches may be rejected");
                self.progress_reporter.report_warning(
                    "Access token expired mid-run; remaining searches may be rejected",
                );
                expiry_reported = true;
            }

            let part_number = item.part_number().to_string();
            self.progress_reporter
                .report_progress(index, Some(total), Some(&part_number));

            let part = self.part_resolver.resolve(run_context, item);
            if !part.found() {
                self.progress_reporter.report_warning(&format!(
                    "Line {} ({}): {}",
                    part.line_item().row_number(),
                    part_number,
                    part.note().unwrap_or("not resolved")
                ));
            }
            parts.push(part);
        }

        self.progress_reporter
            .report_progress(total, Some(total), None);
        parts
    }
}
