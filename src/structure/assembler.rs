//! Section assembly.
//!
//! Consumes an ordered sequence of raw text fragments for one page and
//! builds the two-level section hierarchy. A small state machine with two
//! cursors (current section, current sub-section) scoped to a single
//! `assemble` call; pages never share assembler state.

use crate::model::{Section, SubSection};

use super::heading::HeadingClassifier;
use super::normalize::{normalize, split_first_line};

/// Section assembler configuration.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Maximum word count for promoting a heading to a new top-level
    /// section while a section is already open.
    ///
    /// Intentionally lower than the classifier's label-rule word cap;
    /// downstream consumers depend on the resulting section/sub-section
    /// split.
    pub promotion_max_words: usize,

    /// Name of the section synthesized for content that precedes any
    /// detected heading.
    pub fallback_section: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            promotion_max_words: 3,
            fallback_section: "General".to_string(),
        }
    }
}

/// Assembles fragments into an ordered sequence of sections.
pub struct SectionAssembler {
    classifier: HeadingClassifier,
    config: AssemblerConfig,
}

impl SectionAssembler {
    /// Create an assembler with default classifier and configuration.
    pub fn new() -> Self {
        Self {
            classifier: HeadingClassifier::new(),
            config: AssemblerConfig::default(),
        }
    }

    /// Create an assembler with a custom classifier and configuration.
    pub fn with_config(classifier: HeadingClassifier, config: AssemblerConfig) -> Self {
        Self { classifier, config }
    }

    /// Assemble an ordered fragment sequence into sections.
    ///
    /// Whitespace-only fragments are skipped. Never fails; degenerate
    /// input yields an empty result.
    pub fn assemble<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        // Cursor state for one page: index of the current section, and
        // index of the current named sub-section within it. Anonymous
        // sub-sections never become the cursor.
        let mut current: Option<usize> = None;
        let mut current_sub: Option<usize> = None;

        for fragment in fragments {
            let raw = fragment.as_ref();
            let text = normalize(raw);
            if text.is_empty() {
                continue;
            }

            let (first_raw, rest_raw) = split_first_line(raw);
            let first_line = normalize(first_raw);
            let rest = normalize(rest_raw);

            if self.classifier.is_heading(&first_line) {
                let words = first_line.split_whitespace().count();

                if current.is_none() || words <= self.config.promotion_max_words {
                    log::debug!("new section: {:?}", first_line);
                    sections.push(Section::new(&first_line));
                    current = Some(sections.len() - 1);
                    current_sub = None;
                } else {
                    let idx = match current {
                        Some(idx) => idx,
                        // Unreachable while promotion covers the no-section
                        // case, but a heading must land somewhere.
                        None => {
                            sections.push(Section::new(&self.config.fallback_section));
                            sections.len() - 1
                        }
                    };
                    log::debug!(
                        "new sub-section under {:?}: {:?}",
                        sections[idx].section,
                        first_line
                    );
                    sections[idx].add_sub_section(SubSection::new(&first_line));
                    current = Some(idx);
                    current_sub = Some(sections[idx].sub_sections.len() - 1);
                }

                if !rest.is_empty() {
                    let idx = current.expect("heading always opens a section");
                    match current_sub {
                        Some(sub) => sections[idx].sub_sections[sub].add_paragraph(rest),
                        None => sections[idx].add_sub_section(SubSection::anonymous_with(rest)),
                    }
                }
            } else {
                match (current, current_sub) {
                    (Some(idx), Some(sub)) => {
                        sections[idx].sub_sections[sub].add_paragraph(text);
                    }
                    (Some(idx), None) => {
                        sections[idx].add_sub_section(SubSection::anonymous_with(text));
                    }
                    (None, _) => {
                        log::debug!(
                            "paragraph before any heading, synthesizing {:?}",
                            self.config.fallback_section
                        );
                        let mut section = Section::new(&self.config.fallback_section);
                        section.add_sub_section(SubSection::anonymous_with(text));
                        sections.push(section);
                        current = Some(sections.len() - 1);
                        current_sub = None;
                    }
                }
            }
        }

        sections
    }

    /// Get the assembler configuration.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Get the heading classifier.
    pub fn classifier(&self) -> &HeadingClassifier {
        &self.classifier
    }
}

impl Default for SectionAssembler {
    fn default() -> Self {
        Self::new()
    }
}
