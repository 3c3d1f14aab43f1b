//! Fragment splitting.
//!
//! A fragment is a maximal run of text delimited by blank-line breaks in
//! the page's raw text. Splitting happens before any normalization so
//! that first-line information survives for heading classification.

use regex::Regex;

/// Splits raw page text into blank-line-delimited fragments.
pub struct FragmentSplitter {
    blank_line: Regex,
}

impl FragmentSplitter {
    /// Create a new fragment splitter.
    pub fn new() -> Self {
        Self {
            blank_line: Regex::new(r"\n\s*\n").expect("blank line pattern is valid"),
        }
    }

    /// Split page text into fragments, discarding whitespace-only runs.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.blank_line
            .split(text)
            .filter(|fragment| !fragment.trim().is_empty())
            .collect()
    }
}

impl Default for FragmentSplitter {
    fn default() -> Self {
        Self::new()
    }
}
