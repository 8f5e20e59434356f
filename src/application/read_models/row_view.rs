//! View of one summary table row

use serde::Serialize;

/// License name plus link as shown in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseView {
    pub name: String,
    pub link: String,
}

/// One (project, dependency) occurrence in the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRowView {
    /// Raw project identifier, used for sorting
    pub project: String,
    /// Project identifier with its file extension stripped, used for display
    pub display_project: String,
    pub ecosystem: String,
    pub name: String,
    pub version: String,
    pub project_url: String,
    pub license: LicenseView,
    /// `name@version`, the anchor of this dependency's detail entry
    pub detail_ref: String,
}
