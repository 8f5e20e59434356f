use async_trait::async_trait;
use dep_report::dependency_report::domain::DeclaredLicense;
use dep_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock MetadataRepository for testing
///
/// Serves canned manifests keyed by `name@version` and records every lookup.
/// Identities without a canned manifest get a minimal one carrying only a
/// project URL.
#[derive(Clone)]
pub struct MockMetadataRepository {
    ecosystem: String,
    manifests: HashMap<String, PackageManifest>,
    failing: Vec<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataRepository {
    pub fn new(ecosystem: &str) -> Self {
        Self {
            ecosystem: ecosystem.to_string(),
            manifests: HashMap::new(),
            failing: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_manifest(mut self, manifest: PackageManifest) -> Self {
        let key = format!("{}@{}", manifest.id, manifest.version);
        self.manifests.insert(key, manifest);
        self
    }

    /// Convenience for a manifest declaring an SPDX expression.
    pub fn with_expression(self, name: &str, version: &str, expression: &str) -> Self {
        self.with_manifest(PackageManifest {
            id: name.to_string(),
            version: version.to_string(),
            authors: format!("{} Authors", name),
            description: format!("{} description", name),
            project_url: format!("https://example.com/{}", name),
            license: Some(DeclaredLicense::new("expression", expression)),
            raw_payload: format!("<package><metadata><id>{}</id></metadata></package>", name),
            ..PackageManifest::default()
        })
    }

    pub fn failing_on(mut self, reference: &str) -> Self {
        self.failing.push(reference.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataRepository for MockMetadataRepository {
    fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    async fn fetch_manifest(&self, identity: &DependencyIdentity) -> Result<PackageManifest> {
        let reference = identity.reference();
        self.calls.lock().unwrap().push(reference.clone());

        if self.failing.contains(&reference) {
            return Err(ReportError::Lookup {
                ecosystem: self.ecosystem.clone(),
                reference,
                details: "Mock registry failure".to_string(),
            }
            .into());
        }

        Ok(self
            .manifests
            .get(&reference)
            .cloned()
            .unwrap_or_else(|| PackageManifest {
                id: identity.name().to_string(),
                version: identity.version().to_string(),
                project_url: format!("https://example.com/{}", identity.name()),
                ..PackageManifest::default()
            }))
    }
}
