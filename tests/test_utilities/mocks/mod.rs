/// Mock implementations for testing
mod mock_metadata_repository;
mod mock_progress_reporter;
mod mock_usage_record_reader;

pub use mock_metadata_repository::MockMetadataRepository;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
pub use mock_usage_record_reader::MockUsageRecordReader;
