/// Report flavor
///
/// Shared by the CLI, the configuration file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single HTML document (default)
    #[default]
    Html,
    /// Markdown document
    Markdown,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Output file used when no `--output` is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Html => "dependency_report.html",
            OutputFormat::Markdown => "dependency_report.md",
            OutputFormat::Json => "dependency_report.json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'html', 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("HTML").unwrap(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let err = OutputFormat::from_str("xml").unwrap_err();
        assert!(err.contains("Invalid format: xml"));
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_default_is_html() {
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::default().default_file_name(),
            "dependency_report.html"
        );
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(
            OutputFormat::Markdown.default_file_name(),
            "dependency_report.md"
        );
        assert_eq!(
            OutputFormat::Json.default_file_name(),
            "dependency_report.json"
        );
    }
}
