use super::nuspec::parse_nuspec;
use crate::dependency_report::domain::{DependencyIdentity, PackageManifest};
use crate::ports::outbound::MetadataRepository;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Ecosystem name served by [`NuGetRepository`]
pub const NUGET_ECOSYSTEM: &str = "nuget";

/// Public NuGet v3 flat container
pub const NUGET_FLAT_CONTAINER_URL: &str = "https://api.nuget.org/v3-flatcontainer";

/// Default per-lookup timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// NuGetRepository adapter fetching `.nuspec` manifests
///
/// Requests `{base}/{id}/{version}/{id}.nuspec`. The flat container only
/// serves lower-case paths, so id and version are lower-cased before being
/// URL-encoded. One request per call, no retries.
pub struct NuGetRepository {
    client: reqwest::Client,
    base_url: String,
}

impl NuGetRepository {
    /// Creates a repository for the public NuGet feed
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(timeout, NUGET_FLAT_CONTAINER_URL)
    }

    /// Creates a repository for any feed exposing the flat container layout
    pub fn with_base_url(timeout: Duration, base_url: &str) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Rejects components that would change the shape of the request path
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        if component.contains('/') || component.contains('\\') || component.contains("..") {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }

        Ok(())
    }

    fn manifest_url(&self, identity: &DependencyIdentity) -> Result<String> {
        Self::validate_url_component(identity.name(), "Package id")?;
        Self::validate_url_component(identity.version(), "Version")?;

        let id = urlencoding::encode(&identity.name().to_lowercase()).into_owned();
        let version = urlencoding::encode(&identity.version().to_lowercase()).into_owned();

        Ok(format!(
            "{}/{}/{}/{}.nuspec",
            self.base_url, id, version, id
        ))
    }

    fn lookup_error(identity: &DependencyIdentity, details: impl Into<String>) -> anyhow::Error {
        ReportError::Lookup {
            ecosystem: NUGET_ECOSYSTEM.to_string(),
            reference: identity.reference(),
            details: details.into(),
        }
        .into()
    }

    async fn fetch_payload(&self, identity: &DependencyIdentity) -> Result<String> {
        let url = self
            .manifest_url(identity)
            .map_err(|e| Self::lookup_error(identity, e.to_string()))?;
        tracing::debug!(%url, "fetching nuspec");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::lookup_error(identity, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::lookup_error(
                identity,
                format!("NuGet returned status code {} for {}", status, url),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::lookup_error(identity, e.to_string()))?;
        tracing::debug!(%url, %status, bytes = body.len(), "received nuspec");
        Ok(body)
    }
}

#[async_trait]
impl MetadataRepository for NuGetRepository {
    fn ecosystem(&self) -> &str {
        NUGET_ECOSYSTEM
    }

    async fn fetch_manifest(&self, identity: &DependencyIdentity) -> Result<PackageManifest> {
        let payload = self.fetch_payload(identity).await?;

        match parse_nuspec(&payload) {
            Ok(manifest) => Ok(manifest),
            Err(details) => {
                tracing::warn!(
                    package = %identity,
                    %details,
                    "nuspec could not be parsed; keeping raw payload only"
                );
                Ok(PackageManifest::raw_only(payload))
            }
        }
    }
}
