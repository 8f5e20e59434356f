use crate::dependency_report::domain::UsageRecord;
use crate::ports::outbound::UsageRecordReader;
use crate::shared::error::ReportError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// CsvUsageReader adapter for comma-separated usage files
///
/// Uses proper CSV quoting, so a quoted field may contain commas. There is
/// no header row; records may have any width; surrounding whitespace is
/// trimmed; blank lines and lines starting with `#` are skipped.
pub struct CsvUsageReader;

impl CsvUsageReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Vec<UsageRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| ReportError::FileRead {
                path: path.to_path_buf(),
                details: format!("Invalid CSV: {}", e),
            })?;

            // whitespace-only line; `,,` still reaches field-count validation
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 1);
            records.push(UsageRecord::new(
                line,
                record.iter().map(str::to_string).collect(),
            ));
        }

        Ok(records)
    }
}

impl Default for CsvUsageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageRecordReader for CsvUsageReader {
    fn read_records(&self, path: &Path) -> Result<Vec<UsageRecord>> {
        validate_input_file(path)?;

        let content = fs::read_to_string(path).map_err(|e| ReportError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let records = self.parse(path, &content)?;
        tracing::debug!(path = %path.display(), records = records.len(), "read usage records");
        Ok(records)
    }
}
