//! Report read model aggregating everything a formatter renders

use super::row_view::{LicenseView, UsageRowView};
use serde::Serialize;

/// Main read model for a dependency report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    /// Summary rows sorted by (project, name, version)
    pub rows: Vec<UsageRowView>,
    /// Detail sections sorted by ecosystem
    pub details: Vec<EcosystemDetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub title: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// All unique dependencies of one ecosystem, sorted by identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemDetailView {
    pub ecosystem: String,
    pub entries: Vec<DetailEntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailEntryView {
    /// `name@version`, also the anchor id
    pub reference: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub owners: String,
    pub project_url: String,
    pub repository_url: String,
    pub license: LicenseView,
    pub dependencies: Vec<String>,
    pub development_only: bool,
    pub raw_payload: String,
}
