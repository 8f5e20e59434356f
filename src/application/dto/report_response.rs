use crate::dependency_report::domain::{DependencyTable, ReportMetadata, UsageTable};

/// Output of the report use case: fully enriched tables ready for assembly.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub usage: UsageTable,
    pub dependencies: DependencyTable,
    pub metadata: ReportMetadata,
    /// Records dropped by the exclusion filter
    pub excluded_records: usize,
}
