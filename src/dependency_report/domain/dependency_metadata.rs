use super::{LicenseDescriptor, PackageManifest};

/// Extended information attached to one dependency identity by enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyMetadata {
    project_url: String,
    repository_url: String,
    description: String,
    owners: String,
    license: LicenseDescriptor,
    transitive_dependency_names: Vec<String>,
    development_only: bool,
    raw_payload: String,
}

impl DependencyMetadata {
    /// Builds metadata from a parsed manifest and an already resolved license.
    ///
    /// Owners fall back to the manifest authors when no owners are declared.
    pub fn from_manifest(manifest: PackageManifest, license: LicenseDescriptor) -> Self {
        let owners = if manifest.owners.trim().is_empty() {
            manifest.authors
        } else {
            manifest.owners
        };

        Self {
            project_url: manifest.project_url,
            repository_url: manifest.repository_url,
            description: manifest.description,
            owners,
            license,
            transitive_dependency_names: manifest.dependency_names,
            development_only: manifest.development_only,
            raw_payload: manifest.raw_payload,
        }
    }

    pub fn project_url(&self) -> &str {
        &self.project_url
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn owners(&self) -> &str {
        &self.owners
    }

    pub fn license(&self) -> &LicenseDescriptor {
        &self.license
    }

    pub fn transitive_dependency_names(&self) -> &[String] {
        &self.transitive_dependency_names
    }

    pub fn is_development_only(&self) -> bool {
        self.development_only
    }

    pub fn raw_payload(&self) -> &str {
        &self.raw_payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> PackageManifest {
        PackageManifest {
            id: "Serilog".to_string(),
            version: "2.12.0".to_string(),
            authors: "Serilog Contributors".to_string(),
            project_url: "https://serilog.net/".to_string(),
            repository_url: "https://github.com/serilog/serilog".to_string(),
            description: "Simple .NET logging".to_string(),
            dependency_names: vec!["System.Diagnostics.DiagnosticSource".to_string()],
            raw_payload: "<package/>".to_string(),
            ..PackageManifest::default()
        }
    }

    #[test]
    fn test_owners_fall_back_to_authors() {
        let metadata = DependencyMetadata::from_manifest(manifest(), LicenseDescriptor::default());
        assert_eq!(metadata.owners(), "Serilog Contributors");
    }

    #[test]
    fn test_owners_preferred_when_present() {
        let mut m = manifest();
        m.owners = "serilog".to_string();
        let metadata = DependencyMetadata::from_manifest(m, LicenseDescriptor::default());
        assert_eq!(metadata.owners(), "serilog");
    }

    #[test]
    fn test_fields_carried_over() {
        let license = LicenseDescriptor::new("Apache License 2.0", "https://spdx.org/licenses/Apache-2.0.html");
        let metadata = DependencyMetadata::from_manifest(manifest(), license.clone());

        assert_eq!(metadata.project_url(), "https://serilog.net/");
        assert_eq!(metadata.repository_url(), "https://github.com/serilog/serilog");
        assert_eq!(metadata.description(), "Simple .NET logging");
        assert_eq!(metadata.license(), &license);
        assert_eq!(
            metadata.transitive_dependency_names(),
            &["System.Diagnostics.DiagnosticSource".to_string()]
        );
        assert!(!metadata.is_development_only());
        assert_eq!(metadata.raw_payload(), "<package/>");
    }
}
