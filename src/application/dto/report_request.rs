use crate::dependency_report::policies::LicensePolicy;
use crate::dependency_report::services::ExcludeMode;
use std::path::PathBuf;

/// Input of the report use case: already merged and validated settings.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub input_path: PathBuf,
    /// Group the projects are reported under; the title is derived from it
    pub group: String,
    pub exclude_pattern: Option<String>,
    pub exclude_mode: ExcludeMode,
    pub license_policy: LicensePolicy,
}

impl ReportRequest {
    pub fn new(input_path: PathBuf, group: impl Into<String>) -> Self {
        Self {
            input_path,
            group: group.into(),
            exclude_pattern: None,
            exclude_mode: ExcludeMode::default(),
            license_policy: LicensePolicy::default(),
        }
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>, mode: ExcludeMode) -> Self {
        self.exclude_pattern = Some(pattern.into());
        self.exclude_mode = mode;
        self
    }

    pub fn with_license_policy(mut self, policy: LicensePolicy) -> Self {
        self.license_policy = policy;
        self
    }
}
