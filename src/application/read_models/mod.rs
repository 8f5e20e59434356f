//! Read models for the rendered report
//!
//! Format-neutral, already-sorted views of the enriched tables. Every
//! formatter renders from these and never touches the domain tables.

pub mod report_read_model;
pub mod report_read_model_builder;
pub mod row_view;

pub use report_read_model::{DetailEntryView, EcosystemDetailView, ReportMetadataView, ReportReadModel};
pub use report_read_model_builder::ReportReadModelBuilder;
pub use row_view::{LicenseView, UsageRowView};
