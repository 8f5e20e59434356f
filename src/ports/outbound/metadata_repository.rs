use crate::dependency_report::domain::{DependencyIdentity, DependencyMetadata, PackageManifest};
use crate::dependency_report::policies::{LicensePolicy, LicenseResolver};
use crate::shared::Result;
use async_trait::async_trait;

/// MetadataRepository port for one package ecosystem's registry
///
/// One implementation exists per ecosystem. Each call to
/// [`fetch_manifest`](Self::fetch_manifest) is exactly one external lookup;
/// nothing is cached or retried.
///
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Ecosystem name this repository serves (matched case-insensitively)
    fn ecosystem(&self) -> &str;

    /// Fetches and parses the manifest of one dependency identity
    ///
    /// Optional manifest fields that are absent stay empty; an unparseable
    /// payload still yields a manifest carrying the raw body.
    ///
    /// # Errors
    /// Returns a lookup error if:
    /// - The request times out or the connection fails
    /// - The registry answers with a non-success status
    async fn fetch_manifest(&self, identity: &DependencyIdentity) -> Result<PackageManifest>;

    /// Fetches the manifest and turns it into enriched metadata
    ///
    /// Resolves the license under `policy` and applies the owners/authors
    /// fallback.
    async fn fetch_metadata(
        &self,
        identity: &DependencyIdentity,
        policy: LicensePolicy,
    ) -> Result<DependencyMetadata> {
        let manifest = self.fetch_manifest(identity).await?;
        let license =
            LicenseResolver::resolve_with_policy(&manifest, &identity.reference(), policy)?;
        Ok(DependencyMetadata::from_manifest(manifest, license))
    }
}
