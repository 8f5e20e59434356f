use crate::dependency_report::domain::DependencyTable;
use crate::ports::outbound::MetadataRepository;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Set of metadata repositories, one per supported ecosystem.
///
/// Ecosystem names are matched case-insensitively, so `NuGet` and `nuget`
/// in the input select the same repository.
#[derive(Default)]
pub struct RegistryCatalog {
    repositories: Vec<Box<dyn MetadataRepository>>,
}

impl RegistryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a repository. A later repository for the same ecosystem replaces the earlier one.
    pub fn register(mut self, repository: Box<dyn MetadataRepository>) -> Self {
        self.repositories
            .retain(|r| !r.ecosystem().eq_ignore_ascii_case(repository.ecosystem()));
        self.repositories.push(repository);
        self
    }

    pub fn for_ecosystem(&self, ecosystem: &str) -> Option<&dyn MetadataRepository> {
        self.repositories
            .iter()
            .find(|r| r.ecosystem().eq_ignore_ascii_case(ecosystem))
            .map(|r| r.as_ref())
    }

    /// Comma-separated list of supported ecosystems
    pub fn supported(&self) -> String {
        let mut names: Vec<&str> = self.repositories.iter().map(|r| r.ecosystem()).collect();
        names.sort_unstable();
        names.join(", ")
    }

    /// Ensures every ecosystem present in `table` has a repository.
    ///
    /// # Errors
    /// [`ReportError::UnsupportedEcosystem`] naming the first unsupported ecosystem.
    pub fn ensure_supports(&self, table: &DependencyTable) -> Result<()> {
        match table
            .ecosystems()
            .find(|ecosystem| self.for_ecosystem(ecosystem).is_none())
        {
            Some(ecosystem) => Err(ReportError::UnsupportedEcosystem {
                ecosystem: ecosystem.to_string(),
                supported: self.supported(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
