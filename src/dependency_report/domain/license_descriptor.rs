use serde::Serialize;

/// Display name plus link for a dependency's license.
///
/// No validation: the link may be empty, or point at a project page rather
/// than a license text when only the weaker fallbacks were available.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LicenseDescriptor {
    display_name: String,
    link: String,
}

impl LicenseDescriptor {
    pub fn new(display_name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            link: link.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}
