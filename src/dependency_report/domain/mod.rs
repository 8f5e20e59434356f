pub mod dependency_identity;
pub mod dependency_metadata;
pub mod dependency_table;
pub mod license_descriptor;
pub mod package_manifest;
pub mod report_metadata;
pub mod usage_record;
pub mod usage_table;

pub use dependency_identity::DependencyIdentity;
pub use dependency_metadata::DependencyMetadata;
pub use dependency_table::DependencyTable;
pub use license_descriptor::LicenseDescriptor;
pub use package_manifest::{DeclaredLicense, PackageManifest};
pub use report_metadata::ReportMetadata;
pub use usage_record::UsageRecord;
pub use usage_table::{UsageEntry, UsageTable};
