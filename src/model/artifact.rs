//! Table and visual artifact types.
//!
//! Artifacts are produced by external collaborators (table detection,
//! image/OCR engines) and merged into page output without further
//! interpretation by the structuring core.

use serde::{Deserialize, Serialize};

/// A table, chart, or image content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact classification
    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    /// Always `None`; artifacts are not attached to a section
    pub section: Option<String>,

    /// OCR-derived description text, if any
    pub description: Option<String>,

    /// 2-D grid of cell strings for tables; empty grid for charts, absent
    /// for plain images
    pub table_data: Option<Vec<Vec<String>>>,
}

impl Artifact {
    /// Create a table artifact from a cell grid.
    ///
    /// Cell strings are never null; empty cells are empty strings.
    pub fn table(grid: Vec<Vec<String>>) -> Self {
        Self {
            kind: ArtifactKind::Table,
            section: None,
            description: None,
            table_data: Some(grid),
        }
    }

    /// Create a chart artifact with an optional description.
    pub fn chart(description: Option<String>) -> Self {
        Self {
            kind: ArtifactKind::Chart,
            section: None,
            description,
            table_data: Some(Vec::new()),
        }
    }

    /// Create an image artifact with an optional description.
    pub fn image(description: Option<String>) -> Self {
        Self {
            kind: ArtifactKind::Image,
            section: None,
            description,
            table_data: None,
        }
    }

    /// Classify a visual artifact from its OCR text.
    ///
    /// Recognized digit characters mark the visual as a chart, otherwise
    /// it is a plain image. Empty OCR text yields no description.
    pub fn from_ocr_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let description = if text.is_empty() { None } else { Some(text) };
        let is_chart = description
            .as_deref()
            .is_some_and(|t| t.chars().any(|c| c.is_ascii_digit()));

        if is_chart {
            Self::chart(description)
        } else {
            Self::image(description)
        }
    }

    /// Check if this artifact is a table.
    pub fn is_table(&self) -> bool {
        self.kind == ArtifactKind::Table
    }

    /// Check if this artifact is a visual (chart or image).
    pub fn is_visual(&self) -> bool {
        matches!(self.kind, ArtifactKind::Chart | ArtifactKind::Image)
    }

    /// Get the number of rows in the table grid (0 for visuals).
    pub fn row_count(&self) -> usize {
        self.table_data.as_ref().map(|g| g.len()).unwrap_or(0)
    }

    /// Get the number of columns in the table grid, based on the first row.
    pub fn column_count(&self) -> usize {
        self.table_data
            .as_ref()
            .and_then(|g| g.first())
            .map(|r| r.len())
            .unwrap_or(0)
    }

    /// Get plain text content: tab-separated cells for tables, the
    /// description for visuals.
    pub fn plain_text(&self) -> String {
        match self.kind {
            ArtifactKind::Table => self
                .table_data
                .as_ref()
                .map(|grid| {
                    grid.iter()
                        .map(|row| row.join("\t"))
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .unwrap_or_default(),
            _ => self.description.clone().unwrap_or_default(),
        }
    }
}

/// Artifact classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A detected table with extracted cells
    Table,
    /// A visual whose OCR text contained digit characters
    Chart,
    /// A visual without recognized numeric text
    Image,
}
