//! Document-level types.

use super::Page;
use serde::{Deserialize, Serialize};

/// A structured document: an ordered sequence of pages.
///
/// Serializes to the `{"pages": [{"page_number": ..., "content": [...]}]}`
/// shape and round-trips field-for-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    ///
    /// Looks up by the page's own `page_number`, not its position, since
    /// page numbers are caller-assigned.
    pub fn get_page(&self, page_number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the total number of sections across all pages.
    pub fn section_count(&self) -> usize {
        self.pages.iter().map(|p| p.sections().count()).sum()
    }

    /// Get the total number of artifacts across all pages.
    pub fn artifact_count(&self) -> usize {
        self.pages.iter().map(|p| p.artifacts().count()).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
