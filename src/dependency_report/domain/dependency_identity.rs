use std::fmt;

/// A dependency's (name, version) pair, the unit of deduplication.
///
/// Equality and ordering are structural: name first, then version, both
/// compared as plain strings. Versions are never interpreted numerically,
/// so `"1.10.0"` orders before `"1.2.0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyIdentity {
    name: String,
    version: String,
}

impl DependencyIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Key shared by table detail links and detail-section anchors: `name@version`.
    pub fn reference(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        let identity = DependencyIdentity::new("Newtonsoft.Json", "13.0.1");
        assert_eq!(identity.reference(), "Newtonsoft.Json@13.0.1");
        assert_eq!(identity.to_string(), identity.reference());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = DependencyIdentity::new("Serilog", "2.12.0");
        let b = DependencyIdentity::new(String::from("Serilog"), String::from("2.12.0"));
        assert_eq!(a, b);
        assert_ne!(a, DependencyIdentity::new("Serilog", "2.12.1"));
    }

    #[test]
    fn test_ordering_name_then_version() {
        let mut identities = vec![
            DependencyIdentity::new("b", "1.0"),
            DependencyIdentity::new("a", "2.0"),
            DependencyIdentity::new("a", "1.0"),
        ];
        identities.sort();
        let refs: Vec<String> = identities.iter().map(|i| i.reference()).collect();
        assert_eq!(refs, vec!["a@1.0", "a@2.0", "b@1.0"]);
    }

    #[test]
    fn test_version_ordering_is_lexicographic() {
        let newer = DependencyIdentity::new("x", "1.10.0");
        let older = DependencyIdentity::new("x", "1.2.0");
        assert!(newer < older);
    }
}
