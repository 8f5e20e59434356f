//! Builder turning the enriched tables into a [`ReportReadModel`]

use super::report_read_model::{DetailEntryView, EcosystemDetailView, ReportMetadataView, ReportReadModel};
use super::row_view::{LicenseView, UsageRowView};
use crate::dependency_report::domain::{
    DependencyIdentity, DependencyMetadata, DependencyTable, LicenseDescriptor, ReportMetadata,
    UsageTable,
};

pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model.
    ///
    /// Rows: one per usage entry, stably sorted by raw project, then
    /// dependency name, then version (plain string comparison). Details: one
    /// section per ecosystem, ecosystem ascending, identities ascending.
    ///
    /// An identity without metadata renders with empty links.
    pub fn build(
        usage: &UsageTable,
        dependencies: &DependencyTable,
        metadata: &ReportMetadata,
    ) -> ReportReadModel {
        ReportReadModel {
            metadata: Self::build_metadata(metadata),
            rows: Self::build_rows(usage, dependencies),
            details: Self::build_details(dependencies),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            title: metadata.title().to_string(),
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn build_rows(usage: &UsageTable, dependencies: &DependencyTable) -> Vec<UsageRowView> {
        let mut rows: Vec<UsageRowView> = usage
            .projects()
            .flat_map(|(project, entries)| {
                entries.iter().map(move |entry| {
                    let metadata = dependencies.metadata(&entry.ecosystem, &entry.identity);
                    Self::build_row(project, &entry.ecosystem, &entry.identity, metadata)
                })
            })
            .collect();

        // sort_by is stable: equal keys keep input order
        rows.sort_by(|a, b| {
            a.project
                .cmp(&b.project)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.version.cmp(&b.version))
        });
        rows
    }

    fn build_row(
        project: &str,
        ecosystem: &str,
        identity: &DependencyIdentity,
        metadata: Option<&DependencyMetadata>,
    ) -> UsageRowView {
        UsageRowView {
            project: project.to_string(),
            display_project: strip_extension(project).to_string(),
            ecosystem: ecosystem.to_string(),
            name: identity.name().to_string(),
            version: identity.version().to_string(),
            project_url: metadata
                .map(|m| m.project_url().to_string())
                .unwrap_or_default(),
            license: license_view(metadata.map(DependencyMetadata::license)),
            detail_ref: identity.reference(),
        }
    }

    fn build_details(dependencies: &DependencyTable) -> Vec<EcosystemDetailView> {
        dependencies
            .ecosystems()
            .map(|ecosystem| EcosystemDetailView {
                ecosystem: ecosystem.to_string(),
                entries: dependencies
                    .entries(ecosystem)
                    .map(|(identity, metadata)| Self::build_detail(identity, metadata))
                    .collect(),
            })
            .collect()
    }

    fn build_detail(
        identity: &DependencyIdentity,
        metadata: Option<&DependencyMetadata>,
    ) -> DetailEntryView {
        let text = |f: fn(&DependencyMetadata) -> &str| metadata.map(f).unwrap_or_default().to_string();

        DetailEntryView {
            reference: identity.reference(),
            name: identity.name().to_string(),
            version: identity.version().to_string(),
            description: text(DependencyMetadata::description),
            owners: text(DependencyMetadata::owners),
            project_url: text(DependencyMetadata::project_url),
            repository_url: text(DependencyMetadata::repository_url),
            license: license_view(metadata.map(DependencyMetadata::license)),
            dependencies: metadata
                .map(|m| m.transitive_dependency_names().to_vec())
                .unwrap_or_default(),
            development_only: metadata.is_some_and(DependencyMetadata::is_development_only),
            raw_payload: text(DependencyMetadata::raw_payload),
        }
    }
}

fn license_view(license: Option<&LicenseDescriptor>) -> LicenseView {
    LicenseView {
        name: license.map(|l| l.display_name().to_string()).unwrap_or_default(),
        link: license.map(|l| l.link().to_string()).unwrap_or_default(),
    }
}

/// Removes the extension of the last path element: `src/Web.csproj` becomes
/// `src/Web`, `.hidden` becomes the empty string, `Makefile` is unchanged.
fn strip_extension(project: &str) -> &str {
    let element_start = project.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match project[element_start..].rfind('.') {
        Some(dot) => &project[..element_start + dot],
        None => project,
    }
}
