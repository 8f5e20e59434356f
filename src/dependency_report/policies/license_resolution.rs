use crate::dependency_report::domain::{LicenseDescriptor, PackageManifest};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Label used when only an explicit license URL is known
pub const LICENSE_LINK_LABEL: &str = "License Link";

/// Label used when only the project page is known
pub const PROJECT_LINK_LABEL: &str = "Project Link";

const SPDX_LICENSE_URL_BASE: &str = "https://spdx.org/licenses";

/// How an SPDX expression that cannot be resolved is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicensePolicy {
    /// Fall through to the license URL, then the project URL
    #[default]
    Lenient,
    /// Fail enrichment with a license parse error
    Strict,
}

/// Resolves a manifest's license into a display name and link.
///
/// Evaluation order:
/// 1. SPDX expression declared by the manifest, resolved against the SPDX license list
/// 2. Explicit license URL, labelled "License Link"
/// 3. Project URL, labelled "Project Link" (possibly empty)
///
/// Only a single plain SPDX identifier is resolved in step 1. Compound
/// expressions (`OR`, `AND`, `WITH`) and `+` suffixes are not resolved.
pub struct LicenseResolver;

impl LicenseResolver {
    /// Total resolution: anything step 1 cannot resolve falls through.
    pub fn resolve(manifest: &PackageManifest) -> LicenseDescriptor {
        Self::resolve_expression(manifest)
            .and_then(|resolved| resolved.ok())
            .or_else(|| Self::from_license_url(manifest))
            .unwrap_or_else(|| Self::from_project_url(manifest))
    }

    /// Like [`resolve`](Self::resolve), but a declared SPDX expression that
    /// cannot be resolved is an error instead of a fallthrough.
    pub fn resolve_strict(manifest: &PackageManifest, reference: &str) -> Result<LicenseDescriptor> {
        match Self::resolve_expression(manifest) {
            Some(Ok(license)) => Ok(license),
            Some(Err(details)) => Err(ReportError::LicenseParse {
                reference: reference.to_string(),
                expression: manifest
                    .license
                    .as_ref()
                    .map(|l| l.value.clone())
                    .unwrap_or_default(),
                details,
            }
            .into()),
            None => Ok(Self::from_license_url(manifest)
                .unwrap_or_else(|| Self::from_project_url(manifest))),
        }
    }

    /// Dispatches on the policy.
    pub fn resolve_with_policy(
        manifest: &PackageManifest,
        reference: &str,
        policy: LicensePolicy,
    ) -> Result<LicenseDescriptor> {
        match policy {
            LicensePolicy::Lenient => Ok(Self::resolve(manifest)),
            LicensePolicy::Strict => Self::resolve_strict(manifest, reference),
        }
    }

    /// `None` when the manifest declares no expression, otherwise the
    /// resolution outcome with a failure reason.
    fn resolve_expression(
        manifest: &PackageManifest,
    ) -> Option<std::result::Result<LicenseDescriptor, String>> {
        let declared = manifest.license.as_ref().filter(|l| l.is_expression())?;
        Some(Self::lookup_spdx(declared.value.trim()))
    }

    fn lookup_spdx(expression: &str) -> std::result::Result<LicenseDescriptor, String> {
        if expression.is_empty() {
            return Err("empty license expression".to_string());
        }

        let parsed = spdx::Expression::parse(expression).map_err(|e| e.to_string())?;

        if expression.contains(char::is_whitespace) || parsed.requirements().count() != 1 {
            return Err("compound license expressions are not supported".to_string());
        }

        let requirement = parsed
            .requirements()
            .next()
            .ok_or_else(|| "expression contains no license".to_string())?;

        match &requirement.req.license {
            spdx::LicenseItem::Spdx { id, or_later: false } => Ok(LicenseDescriptor::new(
                id.full_name,
                format!("{}/{}.html", SPDX_LICENSE_URL_BASE, id.name),
            )),
            spdx::LicenseItem::Spdx { or_later: true, .. } => {
                Err("'or later' license identifiers are not supported".to_string())
            }
            _ => {
                Err("license reference is not on the SPDX license list".to_string())
            }
        }
    }

    fn from_license_url(manifest: &PackageManifest) -> Option<LicenseDescriptor> {
        let url = manifest.license_url.trim();
        (!url.is_empty()).then(|| LicenseDescriptor::new(LICENSE_LINK_LABEL, url))
    }

    fn from_project_url(manifest: &PackageManifest) -> LicenseDescriptor {
        LicenseDescriptor::new(PROJECT_LINK_LABEL, manifest.project_url.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_report::domain::DeclaredLicense;

    fn manifest(
        license: Option<DeclaredLicense>,
        license_url: &str,
        project_url: &str,
    ) -> PackageManifest {
        PackageManifest {
            license,
            license_url: license_url.to_string(),
            project_url: project_url.to_string(),
            ..PackageManifest::default()
        }
    }

    #[test]
    fn test_spdx_expression_takes_precedence() {
        let m = manifest(
            Some(DeclaredLicense::new("expression", "MIT")),
            "https://licenses.nuget.org/MIT",
            "https://example.com",
        );
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "MIT License");
        assert_eq!(license.link(), "https://spdx.org/licenses/MIT.html");
    }

    #[test]
    fn test_spdx_expression_full_name_lookup() {
        let m = manifest(Some(DeclaredLicense::new("expression", "Apache-2.0")), "", "");
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "Apache License 2.0");
        assert_eq!(license.link(), "https://spdx.org/licenses/Apache-2.0.html");
    }

    #[test]
    fn test_license_url_when_no_expression() {
        let m = manifest(None, "https://example.com/LICENSE", "https://example.com");
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "License Link");
        assert_eq!(license.link(), "https://example.com/LICENSE");
    }

    #[test]
    fn test_file_license_is_not_an_expression() {
        let m = manifest(
            Some(DeclaredLicense::new("file", "LICENSE.txt")),
            "https://aka.ms/deprecateLicenseUrl",
            "",
        );
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "License Link");
        assert_eq!(license.link(), "https://aka.ms/deprecateLicenseUrl");
    }

    #[test]
    fn test_project_url_fallback() {
        let m = manifest(None, "", "https://example.com");
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "Project Link");
        assert_eq!(license.link(), "https://example.com");
    }

    #[test]
    fn test_project_url_fallback_may_be_empty() {
        let license = LicenseResolver::resolve(&PackageManifest::default());
        assert_eq!(license.display_name(), "Project Link");
        assert_eq!(license.link(), "");
    }

    #[test]
    fn test_whitespace_license_url_is_ignored() {
        let m = manifest(None, "   ", "https://example.com");
        assert_eq!(LicenseResolver::resolve(&m).display_name(), "Project Link");
    }

    #[test]
    fn test_compound_expression_falls_through_when_lenient() {
        let m = manifest(
            Some(DeclaredLicense::new("expression", "MIT OR Apache-2.0")),
            "https://licenses.nuget.org/MIT%20OR%20Apache-2.0",
            "",
        );
        let license = LicenseResolver::resolve(&m);
        assert_eq!(license.display_name(), "License Link");
    }

    #[test]
    fn test_unknown_identifier_falls_through_when_lenient() {
        let m = manifest(
            Some(DeclaredLicense::new("expression", "Not-A-Real-License")),
            "",
            "https://example.com",
        );
        assert_eq!(LicenseResolver::resolve(&m).display_name(), "Project Link");
    }

    #[test]
    fn test_or_later_falls_through_when_lenient() {
        let m = manifest(Some(DeclaredLicense::new("expression", "GPL-2.0+")), "", "");
        assert_eq!(LicenseResolver::resolve(&m).display_name(), "Project Link");
    }

    #[test]
    fn test_strict_rejects_compound_expression() {
        let m = manifest(Some(DeclaredLicense::new("expression", "MIT OR Apache-2.0")), "", "");
        let err = LicenseResolver::resolve_strict(&m, "Foo@1.0.0").unwrap_err();
        let report_err = err.downcast_ref::<ReportError>().unwrap();
        assert_eq!(report_err.class(), "LicenseParseError");
        assert!(err.to_string().contains("Foo@1.0.0"));
    }

    #[test]
    fn test_strict_rejects_unparseable_expression() {
        let m = manifest(Some(DeclaredLicense::new("expression", "Not-A-Real-License")), "", "");
        assert!(LicenseResolver::resolve_strict(&m, "Foo@1.0.0").is_err());
    }

    #[test]
    fn test_strict_without_expression_uses_fallbacks() {
        let m = manifest(None, "https://example.com/LICENSE", "");
        let license = LicenseResolver::resolve_strict(&m, "Foo@1.0.0").unwrap();
        assert_eq!(license.display_name(), "License Link");
    }

    #[test]
    fn test_resolve_with_policy() {
        let m = manifest(Some(DeclaredLicense::new("expression", "MIT AND")), "", "");
        assert!(LicenseResolver::resolve_with_policy(&m, "x@1", LicensePolicy::Lenient).is_ok());
        assert!(LicenseResolver::resolve_with_policy(&m, "x@1", LicensePolicy::Strict).is_err());
    }
}
