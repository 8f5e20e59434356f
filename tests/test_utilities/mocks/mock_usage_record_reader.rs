use dep_report::prelude::*;
use std::path::Path;

/// Mock UsageRecordReader for testing
///
/// Splits canned CSV-like lines on commas, numbering them from 1.
pub struct MockUsageRecordReader {
    lines: Vec<String>,
    should_fail: bool,
}

impl MockUsageRecordReader {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            lines: Vec::new(),
            should_fail: true,
        }
    }
}

impl UsageRecordReader for MockUsageRecordReader {
    fn read_records(&self, path: &Path) -> Result<Vec<UsageRecord>> {
        if self.should_fail {
            return Err(ReportError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                UsageRecord::new(i + 1, line.split(',').map(|f| f.trim().to_string()).collect())
            })
            .collect())
    }
}
