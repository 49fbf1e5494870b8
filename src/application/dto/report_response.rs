use crate::bom_reporting::domain::ReportContext;

/// ReportResponse - Internal response DTO from the report generation use case
///
/// Carries the assembled context; formatting and writing are left to the
/// caller, which picks the renderer.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub context: ReportContext,
}

impl ReportResponse {
    pub fn new(context: ReportContext) -> Self {
        Self { context }
    }
}
