//! Page and document composition.

use crate::model::{Artifact, ContentItem, Document, Page, Section};

use super::sources::{Collaborators, SourceOutcome};

/// Compose one page's content list: all sections, then all table
/// artifacts, then all visual artifacts, each group in input order.
///
/// The ordering is an assembly-order guarantee, not a reading-order
/// claim. No reordering, filtering, or deduplication.
pub fn compose_page(
    sections: Vec<Section>,
    tables: Vec<Artifact>,
    visuals: Vec<Artifact>,
) -> Vec<ContentItem> {
    let mut content = Vec::with_capacity(sections.len() + tables.len() + visuals.len());
    content.extend(sections.into_iter().map(ContentItem::Section));
    content.extend(tables.into_iter().map(ContentItem::Artifact));
    content.extend(visuals.into_iter().map(ContentItem::Artifact));
    content
}

/// Per-page collaborator outcomes, one per concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcomes {
    /// Page the outcomes belong to (1-indexed)
    pub page_number: u32,

    /// Result of the table source chain
    pub tables: SourceOutcome,

    /// Result of the visual source chain
    pub visuals: SourceOutcome,
}

impl PageOutcomes {
    /// Check if any concern failed on this page.
    pub fn has_failure(&self) -> bool {
        self.tables.is_failed() || self.visuals.is_failed()
    }
}

/// Compose one page by running the collaborator chains and merging their
/// artifacts after the assembled sections.
///
/// Failures degrade to empty artifact lists in the content (best-effort
/// absorption); the returned outcomes keep the typed view so callers can
/// still tell failure from true absence.
pub fn compose_page_with(
    collaborators: &Collaborators,
    page_number: u32,
    sections: Vec<Section>,
) -> (Vec<ContentItem>, PageOutcomes) {
    let tables = collaborators.tables_for(page_number);
    let visuals = collaborators.visuals_for(page_number);

    let content = compose_page(
        sections,
        tables.artifacts().to_vec(),
        visuals.artifacts().to_vec(),
    );

    let outcomes = PageOutcomes {
        page_number,
        tables,
        visuals,
    };
    if outcomes.has_failure() {
        log::warn!(
            "page {}: collaborator failure absorbed, artifacts may be missing",
            page_number
        );
    }

    (content, outcomes)
}

/// Compose a document from per-page content lists.
///
/// Pure aggregation preserving input order; page numbers are assigned by
/// the caller (1-indexed) and passed through unchanged.
pub fn compose_document(pages: Vec<(u32, Vec<ContentItem>)>) -> Document {
    let mut document = Document::new();
    for (page_number, content) in pages {
        document.add_page(Page::with_content(page_number, content));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtifactKind;

    #[test]
    fn test_compose_page_ordering() {
        let sections = vec![Section::new("One"), Section::new("Two")];
        let tables = vec![Artifact::table(vec![vec!["t".to_string()]])];
        let visuals = vec![
            Artifact::image(None),
            Artifact::chart(Some("42".to_string())),
        ];

        let content = compose_page(sections, tables, visuals);

        assert_eq!(content.len(), 5);
        assert!(content[0].is_section());
        assert!(content[1].is_section());
        match (&content[2], &content[3], &content[4]) {
            (
                ContentItem::Artifact(table),
                ContentItem::Artifact(image),
                ContentItem::Artifact(chart),
            ) => {
                assert_eq!(table.kind, ArtifactKind::Table);
                assert_eq!(image.kind, ArtifactKind::Image);
                assert_eq!(chart.kind, ArtifactKind::Chart);
            }
            _ => panic!("expected artifacts after sections"),
        }
    }

    #[test]
    fn test_compose_page_empty_groups() {
        let content = compose_page(Vec::new(), Vec::new(), Vec::new());
        assert!(content.is_empty());
    }

    #[test]
    fn test_compose_page_with_no_collaborators() {
        let collaborators = Collaborators::new();
        let (content, outcomes) =
            compose_page_with(&collaborators, 1, vec![Section::new("Only")]);

        assert_eq!(content.len(), 1);
        assert_eq!(outcomes.tables, SourceOutcome::Unavailable);
        assert_eq!(outcomes.visuals, SourceOutcome::Unavailable);
        assert!(!outcomes.has_failure());
    }

    #[test]
    fn test_compose_document_passes_page_numbers_through() {
        let document = compose_document(vec![(4, Vec::new()), (2, Vec::new())]);

        assert_eq!(document.page_count(), 2);
        assert_eq!(document.pages[0].page_number, 4);
        assert_eq!(document.pages[1].page_number, 2);
    }
}
