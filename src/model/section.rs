//! Section and sub-section types.

use serde::{Deserialize, Serialize};

/// A top-level section of a page: a name plus an ordered sequence of
/// sub-sections.
///
/// Section names never retain a trailing colon; it is stripped at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub section: String,

    /// Sub-sections in document order
    pub sub_sections: Vec<SubSection>,
}

impl Section {
    /// Create a new section from a heading line.
    ///
    /// A trailing colon is stripped from the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            section: strip_trailing_colon(&name.into()),
            sub_sections: Vec::new(),
        }
    }

    /// Add a sub-section to this section.
    pub fn add_sub_section(&mut self, sub: SubSection) {
        self.sub_sections.push(sub);
    }

    /// Get the number of paragraphs across all sub-sections.
    pub fn paragraph_count(&self) -> usize {
        self.sub_sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Check if the section holds no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.sub_sections.iter().all(|s| s.paragraphs.is_empty())
    }

    /// Get plain text content of the section, title included.
    pub fn plain_text(&self) -> String {
        let mut parts = vec![self.section.clone()];
        for sub in &self.sub_sections {
            parts.push(sub.plain_text());
        }
        parts.retain(|p| !p.is_empty());
        parts.join("\n\n")
    }
}

/// A sub-section: an optional name plus an ordered sequence of paragraphs.
///
/// Anonymous sub-sections (`sub_section: None`) hold paragraphs that
/// precede any detected sub-heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    /// Sub-section title, or `None` for an anonymous sub-section
    pub sub_section: Option<String>,

    /// Paragraphs in document order
    pub paragraphs: Vec<String>,
}

impl SubSection {
    /// Create a named sub-section from a heading line.
    ///
    /// A trailing colon is stripped from the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            sub_section: Some(strip_trailing_colon(&name.into())),
            paragraphs: Vec::new(),
        }
    }

    /// Create an anonymous sub-section.
    pub fn anonymous() -> Self {
        Self {
            sub_section: None,
            paragraphs: Vec::new(),
        }
    }

    /// Create an anonymous sub-section holding one paragraph.
    pub fn anonymous_with(paragraph: impl Into<String>) -> Self {
        Self {
            sub_section: None,
            paragraphs: vec![paragraph.into()],
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: impl Into<String>) {
        self.paragraphs.push(paragraph.into());
    }

    /// Check if this sub-section has no detected title.
    pub fn is_anonymous(&self) -> bool {
        self.sub_section.is_none()
    }

    /// Get plain text content of the sub-section, title included.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(ref name) = self.sub_section {
            parts.push(name);
        }
        for p in &self.paragraphs {
            parts.push(p);
        }
        parts.join("\n\n")
    }
}

fn strip_trailing_colon(name: &str) -> String {
    name.trim_end_matches(':').to_string()
}
