pub mod error;
pub mod result;
pub mod security;

pub use error::{ExitCode, MalformedLine, ReportError};
pub use result::Result;
