use crate::application::read_models::{EcosystemDetailView, ReportReadModel, UsageRowView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the summary table
const TABLE_HEADER: &str = "| Project | Ecosystem | Library | Version | License | Raw |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|-----------|---------|---------|---------|-----|\n";

/// MarkdownFormatter adapter rendering the report as Markdown
///
/// Detail anchors are inline `<a id>` tags so the `#name@version` links of
/// the summary table resolve on renderers that allow inline HTML.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Link when a target is known, plain text otherwise
    fn link(text: &str, target: &str) -> String {
        let text = Self::escape_markdown_table_cell(text);
        if target.is_empty() {
            text
        } else {
            format!("[{}]({})", text, target.replace(' ', "%20"))
        }
    }

    /// Longest run of backticks in `text` plus one, at least three
    fn fence_for(text: &str) -> String {
        let longest = text
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(longest.max(2) + 1)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str) {
        output.push_str(&format!("# {}\n\n", title));
    }

    fn render_table(&self, output: &mut String, rows: &[UsageRowView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | [Detail](#{}) |\n",
                Self::escape_markdown_table_cell(&row.display_project),
                Self::escape_markdown_table_cell(&row.ecosystem),
                Self::link(&row.name, &row.project_url),
                Self::escape_markdown_table_cell(&row.version),
                Self::link(&row.license.name, &row.license.link),
                row.detail_ref
            ));
        }
        output.push('\n');
    }

    fn render_details(&self, output: &mut String, section: &EcosystemDetailView) {
        output.push_str(&format!("## Package Details from {}\n\n", section.ecosystem));
        for entry in &section.entries {
            output.push_str(&format!(
                "### <a id=\"{0}\"></a>{0}\n\n",
                entry.reference
            ));
            if !entry.description.is_empty() {
                output.push_str(&format!("{}\n\n", entry.description.replace('\n', " ")));
            }
            if !entry.dependencies.is_empty() {
                output.push_str(&format!(
                    "Depends on: {}\n\n",
                    entry.dependencies.join(", ")
                ));
            }
            let fence = Self::fence_for(&entry.raw_payload);
            output.push_str(&format!(
                "{}xml\n{}\n{}\n\n",
                fence,
                entry.raw_payload.trim_end(),
                fence
            ));
        }
    }

    fn render_footer(&self, output: &mut String, generated_at: &str) {
        output.push_str(&format!("---\n\n_Report generated {}_\n", generated_at));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata.title);
        self.render_table(&mut output, &model.rows);
        for section in &model.details {
            self.render_details(&mut output, section);
        }
        self.render_footer(&mut output, &model.metadata.generated_at);

        Ok(output)
    }
}
