use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::registry_catalog::RegistryCatalog;
use crate::dependency_report::domain::{DependencyTable, UsageRecord};
use crate::dependency_report::policies::LicensePolicy;
use crate::dependency_report::services::{
    DependencyFilter, IngestionResult, ReportMetadataGenerator, UsageIngestor,
};
use crate::ports::outbound::{ProgressReporter, UsageRecordReader};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// GenerateReportUseCase - reads usage records and enriches every unique dependency
///
/// Workflow: validate the exclusion pattern, read records, ingest them into
/// the usage and dependency tables, check every ecosystem has a registry,
/// then look up each unique identity exactly once. The first failing step
/// aborts the run; nothing is rendered from a partial table.
///
/// # Type Parameters
/// * `UR` - UsageRecordReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<UR, PR> {
    record_reader: UR,
    registries: RegistryCatalog,
    progress_reporter: PR,
}

impl<UR, PR> GenerateReportUseCase<UR, PR>
where
    UR: UsageRecordReader,
    PR: ProgressReporter,
{
    pub fn new(record_reader: UR, registries: RegistryCatalog, progress_reporter: PR) -> Self {
        Self {
            record_reader,
            registries,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// - `InvalidExcludePattern` before any input is read
    /// - input errors from the record reader
    /// - `MalformedRecord` listing every short record
    /// - `UnsupportedEcosystem` before the first lookup
    /// - `Lookup` / `LicenseParse` from the first failing lookup
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Validate the exclusion pattern
        let filter = DependencyFilter::new(request.exclude_pattern.as_deref(), request.exclude_mode)?;

        // Step 2: Read raw records
        let records = self.read_records(&request)?;

        // Step 3: Build usage and dependency tables
        let IngestionResult {
            usage,
            mut dependencies,
            excluded,
        } = self.ingest(&records, &filter, &request)?;

        // Step 4: Every ecosystem needs a registry before the first lookup
        self.registries.ensure_supports(&dependencies)?;

        // Step 5: One lookup per unique identity
        self.enrich(&mut dependencies, request.license_policy).await?;

        let title = ReportMetadataGenerator::title_for_group(&request.group);
        let metadata = ReportMetadataGenerator::generate_default_metadata(&title);

        Ok(ReportResponse {
            usage,
            dependencies,
            metadata,
            excluded_records: excluded,
        })
    }

    fn read_records(&self, request: &ReportRequest) -> Result<Vec<UsageRecord>> {
        self.progress_reporter.report(&format!(
            "📖 Loading usage records from: {}",
            request.input_path.display()
        ));

        let records = self.record_reader.read_records(&request.input_path)?;

        self.progress_reporter
            .report(&format!("✅ Read {} record(s)", records.len()));
        Ok(records)
    }

    fn ingest(
        &self,
        records: &[UsageRecord],
        filter: &DependencyFilter,
        request: &ReportRequest,
    ) -> Result<IngestionResult> {
        let result = UsageIngestor::ingest(records, filter)?;

        if result.excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} record(s) based on the exclusion pattern",
                result.excluded
            ));
        } else if let Some(pattern) = request.exclude_pattern.as_deref().filter(|_| filter.is_active()) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        self.progress_reporter.report(&format!(
            "📦 {} usage row(s), {} unique dependenc{}",
            result.usage.len(),
            result.dependencies.len(),
            if result.dependencies.len() == 1 { "y" } else { "ies" }
        ));

        Ok(result)
    }

    /// Looks up every pending identity, in (ecosystem, identity) order.
    async fn enrich(&self, dependencies: &mut DependencyTable, policy: LicensePolicy) -> Result<()> {
        let pending = dependencies.pending();
        let total = pending.len();
        if total == 0 {
            return Ok(());
        }

        self.progress_reporter
            .report("🔍 Fetching dependency metadata...");

        for (index, (ecosystem, identity)) in pending.into_iter().enumerate() {
            let repository = self.registries.for_ecosystem(&ecosystem).ok_or_else(|| {
                ReportError::UnsupportedEcosystem {
                    ecosystem: ecosystem.clone(),
                    supported: self.registries.supported(),
                }
            })?;

            let metadata = match repository.fetch_metadata(&identity, policy).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    self.progress_reporter
                        .report_completion(&format!("❌ Lookup failed for {}", identity));
                    return Err(e);
                }
            };

            dependencies.set_metadata(&ecosystem, &identity, metadata);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&identity.reference()));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Metadata retrieval complete: {} dependenc{} enriched",
            total,
            if total == 1 { "y" } else { "ies" }
        ));
        Ok(())
    }
}
