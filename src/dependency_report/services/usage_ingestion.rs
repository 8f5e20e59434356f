use crate::dependency_report::domain::{DependencyIdentity, DependencyTable, UsageRecord, UsageTable};
use crate::dependency_report::services::DependencyFilter;
use crate::shared::error::{MalformedLine, ReportError};
use crate::shared::Result;

/// Minimum number of fields in a usage record: project, ecosystem, name, version
pub const REQUIRED_FIELDS: usize = 4;

/// Output of ingestion.
#[derive(Debug, Clone, Default)]
pub struct IngestionResult {
    pub usage: UsageTable,
    pub dependencies: DependencyTable,
    /// Number of records dropped by the exclusion filter
    pub excluded: usize,
}

/// Turns raw usage records into the usage table and the table of unique
/// identities awaiting enrichment.
pub struct UsageIngestor;

impl UsageIngestor {
    /// Ingests records in order.
    ///
    /// Every record is validated first; if any has fewer than
    /// [`REQUIRED_FIELDS`] fields, ingestion fails once, listing them all.
    /// Fields past the fourth are ignored. Ecosystem names are lower-cased,
    /// so `NuGet` and `nuget` share one table entry.
    pub fn ingest(records: &[UsageRecord], filter: &DependencyFilter) -> Result<IngestionResult> {
        let malformed: Vec<MalformedLine> = records
            .iter()
            .filter(|r| r.fields.len() < REQUIRED_FIELDS)
            .map(|r| MalformedLine {
                line: r.line,
                field_count: r.fields.len(),
            })
            .collect();

        if !malformed.is_empty() {
            return Err(ReportError::MalformedRecord { lines: malformed }.into());
        }

        let mut result = IngestionResult::default();

        for record in records {
            let (project, ecosystem, name, version) = (
                &record.fields[0],
                &record.fields[1],
                &record.fields[2],
                &record.fields[3],
            );

            if filter.is_excluded(name) {
                result.excluded += 1;
                continue;
            }

            let ecosystem = ecosystem.to_ascii_lowercase();
            let identity = DependencyIdentity::new(name.as_str(), version.as_str());
            result.dependencies.insert_pending(&ecosystem, identity.clone());
            result.usage.record(project, &ecosystem, identity);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_report::services::ExcludeMode;

    fn record(line: usize, fields: &[&str]) -> UsageRecord {
        UsageRecord::new(line, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_ingest_builds_both_tables() {
        let records = vec![
            record(1, &["Web.csproj", "nuget", "Serilog", "2.12.0"]),
            record(2, &["Api.csproj", "nuget", "Serilog", "2.12.0"]),
            record(3, &["Api.csproj", "nuget", "Dapper", "2.0.123"]),
        ];

        let result = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap();

        assert_eq!(result.usage.len(), 3);
        assert_eq!(result.dependencies.len(), 2);
        assert_eq!(result.excluded, 0);
        assert!(result
            .dependencies
            .contains("nuget", &DependencyIdentity::new("Serilog", "2.12.0")));
    }

    #[test]
    fn test_duplicate_usage_rows_are_kept() {
        let records = vec![
            record(1, &["Web.csproj", "nuget", "Serilog", "2.12.0"]),
            record(2, &["Web.csproj", "nuget", "Serilog", "2.12.0"]),
        ];

        let result = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap();
        assert_eq!(result.usage.entries("Web.csproj").len(), 2);
        assert_eq!(result.dependencies.len(), 1);
    }

    #[test]
    fn test_ecosystem_case_shares_one_entry() {
        let records = vec![
            record(1, &["p", "NuGet", "Serilog", "2.12.0"]),
            record(2, &["q", "nuget", "Serilog", "2.12.0"]),
        ];

        let result = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap();
        assert_eq!(result.dependencies.len(), 1);
        assert_eq!(result.dependencies.ecosystems().collect::<Vec<_>>(), vec!["nuget"]);
        assert_eq!(result.usage.entries("p")[0].ecosystem, "nuget");
        assert_eq!(result.usage.len(), 2);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let records = vec![record(1, &["p", "nuget", "A", "1.0", "extra", "more"])];
        let result = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap();
        let entry = &result.usage.entries("p")[0];
        assert_eq!(entry.identity, DependencyIdentity::new("A", "1.0"));
        assert_eq!(entry.ecosystem, "nuget");
    }

    #[test]
    fn test_all_malformed_lines_reported_together() {
        let records = vec![
            record(1, &["p", "nuget", "A"]),
            record(2, &["p", "nuget", "B", "1.0"]),
            record(3, &["p"]),
        ];

        let err = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap_err();
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::MalformedRecord { lines }) => {
                assert_eq!(
                    lines,
                    &vec![
                        MalformedLine {
                            line: 1,
                            field_count: 3
                        },
                        MalformedLine {
                            line: 3,
                            field_count: 1
                        },
                    ]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_record_fails_even_if_it_would_be_excluded() {
        let filter = DependencyFilter::new(Some("A"), ExcludeMode::Substring).unwrap();
        let records = vec![record(1, &["p", "nuget", "A"])];
        assert!(UsageIngestor::ingest(&records, &filter).is_err());
    }

    #[test]
    fn test_excluded_records_contribute_nothing() {
        let filter = DependencyFilter::new(Some("^Microsoft\\."), ExcludeMode::Regex).unwrap();
        let records = vec![
            record(1, &["p", "nuget", "Microsoft.Extensions.Logging", "8.0.0"]),
            record(2, &["p", "nuget", "Serilog", "2.12.0"]),
            record(3, &["q", "nuget", "Microsoft.Extensions.Http", "8.0.0"]),
        ];

        let result = UsageIngestor::ingest(&records, &filter).unwrap();
        assert_eq!(result.excluded, 2);
        assert_eq!(result.usage.len(), 1);
        assert!(result.usage.entries("q").is_empty());
        assert_eq!(result.dependencies.len(), 1);
    }

    #[test]
    fn test_every_used_identity_is_in_dependency_table() {
        let records = vec![
            record(1, &["p", "nuget", "A", "1.0"]),
            record(2, &["q", "npm", "B", "2.0"]),
        ];
        let result = UsageIngestor::ingest(&records, &DependencyFilter::none()).unwrap();
        for (_, entries) in result.usage.projects() {
            for entry in entries {
                assert!(result.dependencies.contains(&entry.ecosystem, &entry.identity));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let result = UsageIngestor::ingest(&[], &DependencyFilter::none()).unwrap();
        assert!(result.usage.is_empty());
        assert!(result.dependencies.is_empty());
    }
}
