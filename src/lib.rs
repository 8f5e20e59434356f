//! dep-report - dependency usage report generator
//!
//! This library reads dependency usage records (project, ecosystem, name,
//! version), looks up every unique dependency once in its package registry,
//! resolves a license for it and renders an HTML, Markdown or JSON report.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let record_reader = CsvUsageReader::new();
//! let registries = RegistryCatalog::new()
//!     .register(Box::new(NuGetRepository::new(DEFAULT_TIMEOUT)?));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(record_reader, registries, progress_reporter);
//!
//! // Execute
//! let request = ReportRequest::new(PathBuf::from("usage.csv"), "Core");
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let read_model =
//!     ReportReadModelBuilder::build(&response.usage, &response.dependencies, &response.metadata);
//! let output = HtmlFormatter::new().format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvUsageReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::{NuGetRepository, DEFAULT_TIMEOUT};
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::application::RegistryCatalog;
    pub use crate::dependency_report::domain::{
        DependencyIdentity, DependencyMetadata, DependencyTable, LicenseDescriptor,
        PackageManifest, ReportMetadata, UsageRecord, UsageTable,
    };
    pub use crate::dependency_report::policies::{LicensePolicy, LicenseResolver};
    pub use crate::dependency_report::services::{DependencyFilter, ExcludeMode, UsageIngestor};
    pub use crate::ports::outbound::{
        MetadataRepository, OutputPresenter, ProgressReporter, ReportFormatter,
        UsageRecordReader,
    };
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
