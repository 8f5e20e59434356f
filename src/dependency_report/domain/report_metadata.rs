/// Document-level information for one generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    title: String,
    generated_at: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(title: String, generated_at: String, tool_name: String, tool_version: String) -> Self {
        Self {
            title,
            generated_at,
            tool_name,
            tool_version,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Generation time formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
