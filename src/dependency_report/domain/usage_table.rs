use super::DependencyIdentity;
use std::collections::BTreeMap;

/// One dependency use by a project, with the ecosystem of the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    pub ecosystem: String,
    pub identity: DependencyIdentity,
}

/// Project name to the dependencies it uses, in input order.
///
/// Duplicates are kept: a project listing the same identity twice yields two
/// entries and, later, two report rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageTable {
    projects: BTreeMap<String, Vec<UsageEntry>>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, project: &str, ecosystem: &str, identity: DependencyIdentity) {
        self.projects
            .entry(project.to_string())
            .or_default()
            .push(UsageEntry {
                ecosystem: ecosystem.to_string(),
                identity,
            });
    }

    pub fn projects(&self) -> impl Iterator<Item = (&str, &[UsageEntry])> {
        self.projects
            .iter()
            .map(|(project, entries)| (project.as_str(), entries.as_slice()))
    }

    pub fn entries(&self, project: &str) -> &[UsageEntry] {
        self.projects
            .get(project)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of usage rows.
    pub fn len(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
