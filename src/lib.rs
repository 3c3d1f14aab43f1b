//! # docstruct
//!
//! Document structuring library for Rust.
//!
//! This library turns a flat, per-page sequence of raw text fragments
//! (already extracted from a paginated document) into a nested logical
//! structure of sections, sub-sections, and paragraphs, and merges that
//! structure with externally produced table and visual artifacts into
//! one ordered per-page content list.
//!
//! ## Quick Start
//!
//! ```
//! use docstruct::{Docstruct, JsonFormat};
//!
//! fn main() -> docstruct::Result<()> {
//!     let pages = ["INTRODUCTION\n\nThis is body text.\n\nMethods:\n\nWe did X."];
//!
//!     let structured = Docstruct::new().structure(&pages);
//!     let json = structured.to_json(JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic heading heuristics**: shout, label, and keyword
//!   rules, explainable and reproducible
//! - **Two-level hierarchy**: section → sub-section → paragraphs, with
//!   anonymous sub-sections for loose body text
//! - **Artifact merging**: table and visual artifacts from pluggable
//!   collaborator sources, with typed per-page outcomes
//! - **Multiple output formats**: JSON, Markdown, plain text
//! - **Parallel processing**: pages are independent and structured with
//!   Rayon when enabled

pub mod compose;
pub mod error;
pub mod model;
pub mod render;
pub mod stream;
pub mod structure;

// Re-export commonly used types
pub use compose::{
    compose_document, compose_page, Collaborators, PageOutcomes, SourceOutcome, TableSource,
    VisualSource,
};
pub use error::{Error, Result};
pub use model::{Artifact, ArtifactKind, ContentItem, Document, Page, Section, SubSection};
pub use render::{from_json, to_json, to_markdown, to_text, JsonFormat};
pub use structure::{
    normalize, AssemblerConfig, ClassifierConfig, CleanupOptions, HeadingClassifier,
    SectionAssembler, StructureOptions,
};

use std::sync::Arc;

use rayon::prelude::*;

use compose::compose_page_with;
use structure::{CleanupPipeline, FragmentSplitter};

/// Structure a single page of raw text with default options.
///
/// The text is split into blank-line-delimited fragments and assembled
/// into sections; the result is a one-page document.
pub fn structure_text(text: &str) -> Document {
    structure_pages(&[text])
}

/// Structure a sequence of page texts with default options.
///
/// Pages are numbered 1-indexed in input order.
pub fn structure_pages<S: AsRef<str> + Sync>(pages: &[S]) -> Document {
    Docstruct::new().structure(pages).into_document()
}

/// Structure a sequence of page texts and render the result as JSON.
pub fn structure_to_json<S: AsRef<str> + Sync>(pages: &[S], format: JsonFormat) -> Result<String> {
    render::to_json(&structure_pages(pages), format)
}

/// Builder for structuring page text into documents.
///
/// # Example
///
/// ```
/// use docstruct::{Docstruct, JsonFormat};
///
/// let structured = Docstruct::new()
///     .sequential()
///     .structure(&["SUMMARY\n\nKey findings follow."]);
///
/// assert_eq!(structured.document().page_count(), 1);
/// ```
pub struct Docstruct {
    options: StructureOptions,
    collaborators: Collaborators,
}

impl Docstruct {
    /// Create a new builder with default options and no collaborators.
    pub fn new() -> Self {
        Self {
            options: StructureOptions::default(),
            collaborators: Collaborators::new(),
        }
    }

    /// Use the given structure options.
    pub fn with_options(mut self, options: StructureOptions) -> Self {
        self.options = options;
        self
    }

    /// Disable parallel page structuring.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the heading classifier configuration.
    pub fn with_classifier(mut self, config: ClassifierConfig) -> Self {
        self.options = self.options.with_classifier(config);
        self
    }

    /// Set the section assembler configuration.
    pub fn with_assembler(mut self, config: AssemblerConfig) -> Self {
        self.options = self.options.with_assembler(config);
        self
    }

    /// Enable pre-structuring text cleanup.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.options = self.options.with_cleanup(cleanup);
        self
    }

    /// Use the given collaborator set.
    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Register a table source. Earlier registrations are preferred.
    pub fn with_table_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.collaborators = self.collaborators.with_table_source(source);
        self
    }

    /// Register a visual source. Earlier registrations are preferred.
    pub fn with_visual_source(mut self, source: Arc<dyn VisualSource>) -> Self {
        self.collaborators = self.collaborators.with_visual_source(source);
        self
    }

    /// Get the structure options.
    pub fn options(&self) -> &StructureOptions {
        &self.options
    }

    /// Structure a sequence of page texts into a document.
    ///
    /// Pages are numbered 1-indexed in input order. With parallel
    /// structuring enabled, pages are processed concurrently and merged
    /// back in page order; the output is identical to sequential
    /// processing.
    pub fn structure<S: AsRef<str> + Sync>(&self, pages: &[S]) -> Structured {
        let engine = PageEngine::new(&self.options);

        let results: Vec<(Vec<ContentItem>, PageOutcomes)> = if self.options.parallel {
            pages
                .par_iter()
                .enumerate()
                .map(|(i, text)| self.structure_one(&engine, i as u32 + 1, text.as_ref()))
                .collect()
        } else {
            pages
                .iter()
                .enumerate()
                .map(|(i, text)| self.structure_one(&engine, i as u32 + 1, text.as_ref()))
                .collect()
        };

        let mut contents = Vec::with_capacity(results.len());
        let mut outcomes = Vec::with_capacity(results.len());
        for (i, (content, outcome)) in results.into_iter().enumerate() {
            contents.push((i as u32 + 1, content));
            outcomes.push(outcome);
        }

        Structured {
            document: compose_document(contents),
            outcomes,
        }
    }

    /// Structure one page's text into a page with the given number.
    pub fn structure_page(&self, page_number: u32, text: &str) -> Page {
        let engine = PageEngine::new(&self.options);
        let (content, _) = self.structure_one(&engine, page_number, text);
        Page::with_content(page_number, content)
    }

    fn structure_one(
        &self,
        engine: &PageEngine,
        page_number: u32,
        text: &str,
    ) -> (Vec<ContentItem>, PageOutcomes) {
        let sections = engine.assemble_page(text);
        log::debug!("page {}: {} sections assembled", page_number, sections.len());
        compose_page_with(&self.collaborators, page_number, sections)
    }
}

impl Default for Docstruct {
    fn default() -> Self {
        Self::new()
    }
}

/// The per-page structuring pipeline: cleanup, fragment splitting, and
/// section assembly. Built once per `structure` call and shared across
/// pages; holds no per-page state.
struct PageEngine {
    splitter: FragmentSplitter,
    assembler: SectionAssembler,
    cleanup: Option<CleanupPipeline>,
}

impl PageEngine {
    fn new(options: &StructureOptions) -> Self {
        let classifier = HeadingClassifier::with_config(options.classifier.clone());
        Self {
            splitter: FragmentSplitter::new(),
            assembler: SectionAssembler::with_config(classifier, options.assembler.clone()),
            cleanup: options
                .cleanup
                .clone()
                .map(CleanupPipeline::new),
        }
    }

    fn assemble_page(&self, text: &str) -> Vec<Section> {
        match &self.cleanup {
            Some(pipeline) if pipeline.is_active() => {
                let cleaned = pipeline.process(text);
                let fragments = self.splitter.split(&cleaned);
                self.assembler.assemble(&fragments)
            }
            _ => {
                let fragments = self.splitter.split(text);
                self.assembler.assemble(&fragments)
            }
        }
    }
}

/// Result of structuring a page sequence.
pub struct Structured {
    document: Document,
    outcomes: Vec<PageOutcomes>,
}

impl Structured {
    /// Get the structured document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the per-page collaborator outcomes.
    pub fn outcomes(&self) -> &[PageOutcomes] {
        &self.outcomes
    }

    /// Check if any collaborator failed on any page.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.has_failure())
    }

    /// Consume the result, keeping only the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }
}
