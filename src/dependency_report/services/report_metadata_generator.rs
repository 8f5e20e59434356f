use crate::dependency_report::domain::ReportMetadata;
use chrono::Local;

/// Footer timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix of every report title
pub const TITLE_PREFIX: &str = "Dependency Report for ";

pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates report metadata stamped with the current local time.
    pub fn generate_metadata(title: &str, tool_name: &str, tool_version: &str) -> ReportMetadata {
        let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();

        ReportMetadata::new(
            title.to_string(),
            generated_at,
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates metadata with this crate's name and version
    pub fn generate_default_metadata(title: &str) -> ReportMetadata {
        Self::generate_metadata(title, env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Builds the report title for a group name.
    pub fn title_for_group(group: &str) -> String {
        format!("{}{}", TITLE_PREFIX, group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("T", "test-tool", "1.0.0");
        assert_eq!(metadata.title(), "T");
        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
    }

    #[test]
    fn test_timestamp_format() {
        let metadata = ReportMetadataGenerator::generate_default_metadata("T");
        let parsed = NaiveDateTime::parse_from_str(metadata.generated_at(), TIMESTAMP_FORMAT);
        assert!(parsed.is_ok());
        assert_eq!(metadata.generated_at().len(), 19);
    }

    #[test]
    fn test_default_metadata_uses_crate_info() {
        let metadata = ReportMetadataGenerator::generate_default_metadata("T");
        assert_eq!(metadata.tool_name(), "dep-report");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_title_for_group() {
        assert_eq!(
            ReportMetadataGenerator::title_for_group("Payments"),
            "Dependency Report for Payments"
        );
    }
}
