/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (input files, package registries,
/// console, output destinations).
pub mod formatter;
pub mod metadata_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod usage_record_reader;

pub use formatter::ReportFormatter;
pub use metadata_repository::MetadataRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use usage_record_reader::UsageRecordReader;
