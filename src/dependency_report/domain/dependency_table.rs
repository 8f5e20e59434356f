use super::{DependencyIdentity, DependencyMetadata};
use std::collections::BTreeMap;

/// Ecosystem-scoped table of unique dependency identities.
///
/// An entry is `None` until enrichment stores its metadata. Both levels are
/// ordered maps, so iteration is ecosystem ascending then identity ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyTable {
    ecosystems: BTreeMap<String, BTreeMap<DependencyIdentity, Option<DependencyMetadata>>>,
}

impl DependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an identity awaiting enrichment. Returns `false` if it was already present.
    pub fn insert_pending(&mut self, ecosystem: &str, identity: DependencyIdentity) -> bool {
        let entries = self.ecosystems.entry(ecosystem.to_string()).or_default();
        if entries.contains_key(&identity) {
            return false;
        }
        entries.insert(identity, None);
        true
    }

    /// Identities that still have no metadata, in deterministic order.
    pub fn pending(&self) -> Vec<(String, DependencyIdentity)> {
        self.ecosystems
            .iter()
            .flat_map(|(ecosystem, entries)| {
                entries
                    .iter()
                    .filter(|(_, metadata)| metadata.is_none())
                    .map(move |(identity, _)| (ecosystem.clone(), identity.clone()))
            })
            .collect()
    }

    /// Stores metadata for a registered identity. Returns `false` for unknown identities.
    pub fn set_metadata(
        &mut self,
        ecosystem: &str,
        identity: &DependencyIdentity,
        metadata: DependencyMetadata,
    ) -> bool {
        match self
            .ecosystems
            .get_mut(ecosystem)
            .and_then(|entries| entries.get_mut(identity))
        {
            Some(slot) => {
                *slot = Some(metadata);
                true
            }
            None => false,
        }
    }

    pub fn metadata(
        &self,
        ecosystem: &str,
        identity: &DependencyIdentity,
    ) -> Option<&DependencyMetadata> {
        self.ecosystems
            .get(ecosystem)
            .and_then(|entries| entries.get(identity))
            .and_then(|metadata| metadata.as_ref())
    }

    pub fn contains(&self, ecosystem: &str, identity: &DependencyIdentity) -> bool {
        self.ecosystems
            .get(ecosystem)
            .is_some_and(|entries| entries.contains_key(identity))
    }

    pub fn ecosystems(&self) -> impl Iterator<Item = &str> {
        self.ecosystems.keys().map(String::as_str)
    }

    pub fn entries(
        &self,
        ecosystem: &str,
    ) -> impl Iterator<Item = (&DependencyIdentity, Option<&DependencyMetadata>)> {
        self.ecosystems
            .get(ecosystem)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(id, meta)| (id, meta.as_ref())))
    }

    /// Number of unique identities across all ecosystems.
    pub fn len(&self) -> usize {
        self.ecosystems.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_fully_enriched(&self) -> bool {
        self.ecosystems
            .values()
            .all(|entries| entries.values().all(Option::is_some))
    }
}
