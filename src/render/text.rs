//! Plain text rendering.

use crate::model::Document;

/// Convert a document to plain text.
///
/// Pages are separated by a form feed line, matching the page-break
/// convention of common text-layer extractors.
pub fn to_text(doc: &Document) -> String {
    doc.pages
        .iter()
        .map(|page| page.plain_text())
        .collect::<Vec<_>>()
        .join("\n\u{0C}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Section, SubSection};

    #[test]
    fn test_to_text_joins_pages() {
        let mut first = Section::new("Overview");
        first.add_sub_section(SubSection::anonymous_with("First page body."));
        let mut page1 = Page::new(1);
        page1.add_item(first.into());

        let mut page2 = Page::new(2);
        let mut second = Section::new("Details");
        second.add_sub_section(SubSection::anonymous_with("Second page body."));
        page2.add_item(second.into());

        let mut doc = Document::new();
        doc.add_page(page1);
        doc.add_page(page2);

        let text = to_text(&doc);
        assert!(text.contains("Overview\n\nFirst page body."));
        assert!(text.contains('\u{0C}'));
        assert!(text.contains("Details\n\nSecond page body."));
    }

    #[test]
    fn test_to_text_empty_document() {
        assert_eq!(to_text(&Document::new()), "");
    }
}
