//! Markdown rendering for structured documents.

use crate::model::{Artifact, ArtifactKind, ContentItem, Document, Section};

/// Convert a document to Markdown.
///
/// Sections render as `##` headings, named sub-sections as `###`,
/// tables as Markdown grids, and visuals as emphasized descriptions.
pub fn to_markdown(doc: &Document) -> String {
    let renderer = MarkdownRenderer::new();
    renderer.render(doc)
}

/// Renders structured documents as Markdown.
pub struct MarkdownRenderer {
    /// Emit an HTML comment marking each page boundary
    pub page_markers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with default settings.
    pub fn new() -> Self {
        Self { page_markers: true }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut blocks: Vec<String> = Vec::new();

        for page in &doc.pages {
            if self.page_markers {
                blocks.push(format!("<!-- page {} -->", page.page_number));
            }
            for item in &page.content {
                match item {
                    ContentItem::Section(section) => blocks.push(self.render_section(section)),
                    ContentItem::Artifact(artifact) => {
                        if let Some(block) = self.render_artifact(artifact) {
                            blocks.push(block);
                        }
                    }
                }
            }
        }

        let mut output = blocks.join("\n\n");
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn render_section(&self, section: &Section) -> String {
        let mut parts = vec![format!("## {}", section.section)];

        for sub in &section.sub_sections {
            if let Some(ref name) = sub.sub_section {
                parts.push(format!("### {}", name));
            }
            for paragraph in &sub.paragraphs {
                parts.push(paragraph.clone());
            }
        }

        parts.join("\n\n")
    }

    fn render_artifact(&self, artifact: &Artifact) -> Option<String> {
        match artifact.kind {
            ArtifactKind::Table => {
                let grid = artifact.table_data.as_ref()?;
                if grid.is_empty() {
                    return None;
                }
                Some(render_table(grid))
            }
            ArtifactKind::Chart | ArtifactKind::Image => {
                let label = match artifact.kind {
                    ArtifactKind::Chart => "Chart",
                    _ => "Image",
                };
                match artifact.description.as_deref() {
                    Some(description) => Some(format!("*{}: {}*", label, description)),
                    None => Some(format!("*{}*", label)),
                }
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_table(grid: &[Vec<String>]) -> String {
    let columns = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(grid.len() + 1);
    for (i, row) in grid.iter().enumerate() {
        let mut cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        cells.resize(columns, String::new());
        lines.push(format!("| {} |", cells.join(" | ")));

        if i == 0 {
            let separator = vec!["---"; columns];
            lines.push(format!("| {} |", separator.join(" | ")));
        }
    }

    lines.join("\n")
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, SubSection};

    fn doc_with(content: Vec<ContentItem>) -> Document {
        let mut doc = Document::new();
        doc.add_page(Page::with_content(1, content));
        doc
    }

    #[test]
    fn test_section_rendering() {
        let mut section = Section::new("Results");
        section.add_sub_section(SubSection::new("Primary outcomes:"));
        section.sub_sections[0].add_paragraph("We found Y.");

        let md = to_markdown(&doc_with(vec![section.into()]));
        assert!(md.contains("## Results"));
        assert!(md.contains("### Primary outcomes"));
        assert!(md.contains("We found Y."));
    }

    #[test]
    fn test_anonymous_sub_section_has_no_heading() {
        let mut section = Section::new("Results");
        section.add_sub_section(SubSection::anonymous_with("Body."));

        let md = to_markdown(&doc_with(vec![section.into()]));
        assert!(md.contains("## Results"));
        assert!(!md.contains("###"));
    }

    #[test]
    fn test_table_rendering() {
        let artifact = Artifact::table(vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
        ]);

        let md = to_markdown(&doc_with(vec![artifact.into()]));
        assert!(md.contains("| Name | Age |"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| Alice | 30 |"));
    }

    #[test]
    fn test_table_cell_escaping() {
        let artifact = Artifact::table(vec![vec!["a|b".to_string()]]);
        let md = to_markdown(&doc_with(vec![artifact.into()]));
        assert!(md.contains("a\\|b"));
    }

    #[test]
    fn test_visual_rendering() {
        let md = to_markdown(&doc_with(vec![
            Artifact::chart(Some("Revenue 2024".to_string())).into(),
            Artifact::image(None).into(),
        ]));
        assert!(md.contains("*Chart: Revenue 2024*"));
        assert!(md.contains("*Image*"));
    }

    #[test]
    fn test_page_markers() {
        let md = to_markdown(&doc_with(vec![Section::new("Overview").into()]));
        assert!(md.contains("<!-- page 1 -->"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_markdown(&Document::new()), "");
    }
}
