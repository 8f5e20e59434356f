use crate::application::read_models::{EcosystemDetailView, ReportReadModel, UsageRowView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const TABLE_HEADER: &str = "<tr><th>Project</th><th>Ecosystem</th><th>Library</th><th>Version</th><th>License</th><th>Raw</th></tr>";

/// HtmlFormatter adapter rendering the report as a single HTML document
///
/// Escaping is minimal: text content escapes `&` and `<` only
/// (raw manifests stay readable inside `<pre>`), attribute values also
/// escape `"`.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes `&` and `<`, in that order
    pub fn escape_text(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;")
    }

    fn escape_attribute(text: &str) -> String {
        Self::escape_text(text).replace('"', "&quot;")
    }

    fn link(href: &str, text: &str) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            Self::escape_attribute(href),
            Self::escape_text(text)
        )
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_header(&self, output: &mut String, title: &str) {
        let title = Self::escape_text(title);
        output.push_str(&format!("<html><head><title>{}</title></head>\n", title));
        output.push_str("<body>\n");
        output.push_str(&format!("<h2>{}</h2>\n", title));
    }

    fn render_table(&self, output: &mut String, rows: &[UsageRowView]) {
        output.push_str("<table>\n");
        output.push_str(TABLE_HEADER);
        output.push('\n');
        for row in rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }
        output.push_str("</table>\n");
    }

    fn render_row(&self, row: &UsageRowView) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            Self::escape_text(&row.display_project),
            Self::escape_text(&row.ecosystem),
            Self::link(&row.project_url, &row.name),
            Self::escape_text(&row.version),
            Self::link(&row.license.link, &row.license.name),
            Self::link(&format!("#{}", row.detail_ref), "Detail"),
        )
    }

    fn render_details(&self, output: &mut String, section: &EcosystemDetailView) {
        output.push_str(&format!(
            "<h2>Package Details from {}</h2>\n",
            Self::escape_text(&section.ecosystem)
        ));
        for entry in &section.entries {
            output.push_str(&format!(
                "<h3><a id=\"{}\"></a>{}</h3><pre>{}</pre>\n",
                Self::escape_attribute(&entry.reference),
                Self::escape_text(&entry.reference),
                Self::escape_text(&entry.raw_payload)
            ));
        }
    }

    fn render_footer(&self, output: &mut String, generated_at: &str) {
        output.push_str(&format!(
            "<footer><p align=\"center\">Report generated {}</p></footer></body></html>\n",
            Self::escape_text(generated_at)
        ));
    }
}

impl ReportFormatter for HtmlFormatter {
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
