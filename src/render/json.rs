//! JSON rendering for structured documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Parse a document from its JSON representation.
pub fn from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artifact, Page, Section, SubSection};

    fn sample_document() -> Document {
        let mut section = Section::new("Results");
        section.add_sub_section(SubSection::anonymous_with("We found Y."));

        let mut page = Page::new(1);
        page.add_item(section.into());
        page.add_item(Artifact::table(vec![vec!["a".to_string(), String::new()]]).into());

        let mut doc = Document::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"page_number\": 1"));
        assert!(json.contains("\"section\": \"Results\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"type\":\"table\""));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample_document();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("not json").is_err());
    }
}
