//! Page-level types.

use super::{Artifact, Section};
use serde::{Deserialize, Serialize};

/// A single page of structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed, assigned by the caller)
    pub page_number: u32,

    /// Ordered content items: section trees first, then artifacts
    pub content: Vec<ContentItem>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            content: Vec::new(),
        }
    }

    /// Create a page with content.
    pub fn with_content(page_number: u32, content: Vec<ContentItem>) -> Self {
        Self {
            page_number,
            content,
        }
    }

    /// Add a content item to the page.
    pub fn add_item(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Check if the page has no content items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the sections on this page.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.content.iter().filter_map(|item| match item {
            ContentItem::Section(s) => Some(s),
            ContentItem::Artifact(_) => None,
        })
    }

    /// Get the artifacts on this page.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.content.iter().filter_map(|item| match item {
            ContentItem::Artifact(a) => Some(a),
            ContentItem::Section(_) => None,
        })
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|item| item.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A content item on a page: a section tree or an external artifact.
///
/// Serialized untagged so the JSON carries either the
/// `{"section": ..., "sub_sections": [...]}` shape or the
/// `{"type": ..., "table_data": ...}` shape directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    /// A section with its sub-sections and paragraphs
    Section(Section),

    /// A table, chart, or image artifact
    Artifact(Artifact),
}

impl ContentItem {
    /// Check if this item is a section tree.
    pub fn is_section(&self) -> bool {
        matches!(self, ContentItem::Section(_))
    }

    /// Check if this item is an artifact.
    pub fn is_artifact(&self) -> bool {
        matches!(self, ContentItem::Artifact(_))
    }

    /// Get plain text content of the item.
    pub fn plain_text(&self) -> String {
        match self {
            ContentItem::Section(s) => s.plain_text(),
            ContentItem::Artifact(a) => a.plain_text(),
        }
    }
}

impl From<Section> for ContentItem {
    fn from(section: Section) -> Self {
        ContentItem::Section(section)
    }
}

impl From<Artifact> for ContentItem {
    fn from(artifact: Artifact) -> Self {
        ContentItem::Artifact(artifact)
    }
}
