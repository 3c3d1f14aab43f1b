//! Integration tests for page composition and collaborator fallback.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use docstruct::{
    compose_page, Artifact, ArtifactKind, Collaborators, ContentItem, Docstruct, Error, Result,
    Section, SourceOutcome, TableSource, VisualSource,
};

/// Table source returning a fixed grid per page.
struct GridSource {
    name: &'static str,
    grid: Vec<Vec<String>>,
    calls: AtomicU32,
}

impl GridSource {
    fn new(name: &'static str, grid: Vec<Vec<String>>) -> Self {
        Self {
            name,
            grid,
            calls: AtomicU32::new(0),
        }
    }
}

impl TableSource for GridSource {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, _page_number: u32) -> Result<Vec<Artifact>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Artifact::table(self.grid.clone())])
    }
}

/// Table source that always fails.
struct BrokenSource;

impl TableSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn extract(&self, _page_number: u32) -> Result<Vec<Artifact>> {
        Err(Error::collaborator("broken", "detection crashed"))
    }
}

/// Visual source classifying fixed OCR text.
struct OcrSource {
    text: &'static str,
}

impl VisualSource for OcrSource {
    fn name(&self) -> &str {
        "ocr"
    }

    fn extract(&self, _page_number: u32) -> Result<Vec<Artifact>> {
        Ok(vec![Artifact::from_ocr_text(self.text)])
    }
}

fn grid() -> Vec<Vec<String>> {
    vec![vec!["h1".to_string(), "h2".to_string()]]
}

#[test]
fn test_sections_precede_artifacts() {
    let content = compose_page(
        vec![Section::new("A"), Section::new("B")],
        vec![Artifact::table(grid())],
        vec![Artifact::image(None)],
    );

    let kinds: Vec<bool> = content.iter().map(ContentItem::is_section).collect();
    assert_eq!(kinds, vec![true, true, false, false]);
}

#[test]
fn test_group_relative_order_is_preserved() {
    let tables = vec![
        Artifact::table(vec![vec!["first".to_string()]]),
        Artifact::table(vec![vec!["second".to_string()]]),
    ];
    let content = compose_page(Vec::new(), tables, Vec::new());

    match (&content[0], &content[1]) {
        (ContentItem::Artifact(a), ContentItem::Artifact(b)) => {
            assert_eq!(a.table_data.as_ref().unwrap()[0][0], "first");
            assert_eq!(b.table_data.as_ref().unwrap()[0][0], "second");
        }
        _ => panic!("expected two artifacts"),
    }
}

#[test]
fn test_structure_with_collaborators() {
    let structured = Docstruct::new()
        .sequential()
        .with_table_source(Arc::new(GridSource::new("grid", grid())))
        .with_visual_source(Arc::new(OcrSource {
            text: "Revenue grew 12 percent",
        }))
        .structure(&["SUMMARY\n\nBody text."]);

    let doc = structured.document();
    let page = &doc.pages[0];
    assert_eq!(page.sections().count(), 1);

    let artifacts: Vec<_> = page.artifacts().collect();
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0].kind, ArtifactKind::Table);
    // Digits in the OCR text classify the visual as a chart.
    assert_eq!(artifacts[1].kind, ArtifactKind::Chart);

    assert!(!structured.has_failures());
}

#[test]
fn test_failed_chain_absorbs_but_reports() {
    let structured = Docstruct::new()
        .sequential()
        .with_table_source(Arc::new(BrokenSource))
        .structure(&["SUMMARY\n\nBody text."]);

    // Best-effort content: the page simply has no tables.
    assert_eq!(structured.document().pages[0].artifacts().count(), 0);

    // The typed outcome still records the failure.
    assert!(structured.has_failures());
    match &structured.outcomes()[0].tables {
        SourceOutcome::Failed { source_name, .. } => assert_eq!(source_name, "broken"),
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn test_fallback_source_used_after_failure() {
    let fallback = Arc::new(GridSource::new("fallback", grid()));
    let structured = Docstruct::new()
        .sequential()
        .with_table_source(Arc::new(BrokenSource))
        .with_table_source(fallback.clone())
        .structure(&["SUMMARY\n\nBody text."]);

    assert_eq!(structured.document().pages[0].artifacts().count(), 1);
    assert!(!structured.has_failures());
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_no_collaborators_means_unavailable() {
    let collaborators = Collaborators::new();
    assert_eq!(collaborators.tables_for(1), SourceOutcome::Unavailable);
    assert!(!collaborators.has_tables());
    assert!(!collaborators.has_visuals());
}
