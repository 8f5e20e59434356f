pub mod dependency_filter;
pub mod report_metadata_generator;
pub mod usage_ingestion;

pub use dependency_filter::{DependencyFilter, ExcludeMode};
pub use report_metadata_generator::ReportMetadataGenerator;
pub use usage_ingestion::{IngestionResult, UsageIngestor};
