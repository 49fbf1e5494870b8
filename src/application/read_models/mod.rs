//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give the renderers a denormalized,
//! pre-formatted representation of the report context.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{
    PartRowView, PriceBreakView, ReportMetadataView, ReportReadModel, SkippedRowView,
    SummaryView, VariationView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
