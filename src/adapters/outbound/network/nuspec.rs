use crate::dependency_report::domain::{DeclaredLicense, PackageManifest};
use serde::Deserialize;

/// Root `<package>` element of a `.nuspec` document
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "package")]
struct NuspecPackage {
    #[serde(default)]
    metadata: NuspecMetadata,
}

/// `<metadata>` element. Every child is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct NuspecMetadata {
    id: String,
    version: String,
    title: String,
    authors: String,
    owners: String,
    development_dependency: Option<String>,
    license: Option<NuspecLicense>,
    license_url: String,
    project_url: String,
    description: String,
    repository: Option<NuspecRepository>,
    dependencies: Option<NuspecDependencies>,
}

/// `<license type="expression|file">value</license>`
#[derive(Debug, Default, Deserialize)]
struct NuspecLicense {
    #[serde(rename = "@type", default)]
    kind: String,
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
struct NuspecRepository {
    #[serde(rename = "@type", default)]
    kind: String,
    #[serde(rename = "@url", default)]
    url: String,
    #[serde(rename = "@branch", default)]
    branch: String,
    #[serde(rename = "@commit", default)]
    commit: String,
}

/// `<dependencies>` holds either flat `<dependency>` entries or
/// per-framework `<group>` elements.
#[derive(Debug, Default, Deserialize)]
struct NuspecDependencies {
    #[serde(rename = "dependency", default)]
    dependency: Vec<NuspecDependency>,
    #[serde(rename = "group", default)]
    group: Vec<NuspecDependencyGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
struct NuspecDependencyGroup {
    #[serde(rename = "@targetFramework", default)]
    target_framework: String,
    #[serde(rename = "dependency", default)]
    dependency: Vec<NuspecDependency>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
struct NuspecDependency {
    #[serde(rename = "@id", default)]
    id: String,
    #[serde(rename = "@version", default)]
    version: String,
}

impl NuspecDependencies {
    /// Dependency ids across flat entries and all groups, first occurrence kept
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let grouped = self.group.iter().flat_map(|g| g.dependency.iter());
        for dependency in self.dependency.iter().chain(grouped) {
            let id = dependency.id.trim();
            if !id.is_empty() && !names.iter().any(|n| n == id) {
                names.push(id.to_string());
            }
        }
        names
    }
}

/// Parses a `.nuspec` payload into a manifest.
///
/// Returns `Err` with the parser message when the payload is not a readable
/// nuspec document; the caller decides how to degrade.
pub(crate) fn parse_nuspec(payload: &str) -> Result<PackageManifest, String> {
    let package: NuspecPackage = quick_xml::de::from_str(payload).map_err(|e| e.to_string())?;
    let metadata = package.metadata;

    Ok(PackageManifest {
        id: metadata.id.trim().to_string(),
        version: metadata.version.trim().to_string(),
        title: metadata.title.trim().to_string(),
        authors: metadata.authors.trim().to_string(),
        owners: metadata.owners.trim().to_string(),
        description: metadata.description.trim().to_string(),
        project_url: metadata.project_url.trim().to_string(),
        repository_url: metadata
            .repository
            .map(|r| r.url.trim().to_string())
            .unwrap_or_default(),
        license: metadata
            .license
            .map(|l| DeclaredLicense::new(l.kind.trim(), l.value.trim())),
        license_url: metadata.license_url.trim().to_string(),
        dependency_names: metadata
            .dependencies
            .map(|d| d.names())
            .unwrap_or_default(),
        development_only: metadata
            .development_dependency
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
        raw_payload: payload.to_string(),
    })
}
