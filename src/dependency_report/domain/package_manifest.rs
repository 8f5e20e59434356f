/// License element as declared by a package manifest.
///
/// `kind` is the declaration type (`expression`, `file`, ...), `value` the
/// element text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclaredLicense {
    pub kind: String,
    pub value: String,
}

impl DeclaredLicense {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// True when the license is declared as an SPDX expression.
    pub fn is_expression(&self) -> bool {
        self.kind.eq_ignore_ascii_case("expression")
    }
}

/// Ecosystem-neutral view of one registry manifest.
///
/// Produced by a metadata repository adapter after its single lookup.
/// Fields absent from the payload stay empty / false; `raw_payload` is always
/// the verbatim response body, even when structured parsing failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageManifest {
    pub id: String,
    pub version: String,
    pub title: String,
    pub authors: String,
    pub owners: String,
    pub description: String,
    pub project_url: String,
    pub repository_url: String,
    pub license: Option<DeclaredLicense>,
    pub license_url: String,
    pub dependency_names: Vec<String>,
    pub development_only: bool,
    pub raw_payload: String,
}

impl PackageManifest {
    /// Manifest carrying only the raw body, used when the payload could not be parsed.
    pub fn raw_only(raw_payload: impl Into<String>) -> Self {
        Self {
            raw_payload: raw_payload.into(),
            ..Self::default()
        }
    }
}
