use crate::dependency_report::domain::UsageRecord;
use crate::shared::Result;
use std::path::Path;

/// UsageRecordReader port for reading raw usage tuples
///
/// Implementations tokenize the input source and return every non-empty
/// record with its line number. Field-count validation is left to ingestion.
pub trait UsageRecordReader {
    /// Reads all records from `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails security validation
    /// - The file cannot be read or tokenized
    fn read_records(&self, path: &Path) -> Result<Vec<UsageRecord>>;
}
