/// Filesystem adapters: usage input and report output
mod csv_reader;
mod file_writer;

pub use csv_reader::CsvUsageReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
