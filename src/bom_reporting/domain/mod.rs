pub mod access_token;
pub mod column_schema;
pub mod line_item;
pub mod part;
pub mod report_context;
pub mod resolved_part;
pub mod run_context;

pub use access_token::AccessToken;
pub use column_schema::{ColumnSchema, ColumnSpec};
pub use line_item::{LineItem, PartNumber, SkippedRow};
pub use part::{PartDetails, PartParameters, PartSearchResult, PriceBreak, ProductVariation};
pub use report_context::{ReportContext, ReportMetadata};
pub use resolved_part::{MatchKind, ResolvedPart, SelectedPrice};
pub use run_context::RunContext;
