//! Optional text cleanup applied to raw page text before structuring.
//!
//! All steps are off by default; the default pipeline leaves input
//! byte-identical so structuring output stays reproducible against other
//! implementations of the same heuristics.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for pre-structuring text cleanup.
#[derive(Debug, Clone, Default)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Replace ligature codepoints (fi, fl, etc.) with their letters
    pub fix_ligatures: bool,

    /// Re-join words hyphenated across line breaks
    pub fix_hyphenation: bool,
}

impl CleanupOptions {
    /// Enable every cleanup step.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            fix_hyphenation: true,
        }
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    hyphen_break: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            hyphen_break: Regex::new(r"(\p{L})-\n(\p{L})").expect("hyphen pattern is valid"),
            ligature_map: vec![
                ("\u{FB00}", "ff"),
                ("\u{FB01}", "fi"),
                ("\u{FB02}", "fl"),
                ("\u{FB03}", "ffi"),
                ("\u{FB04}", "ffl"),
                ("\u{FB05}", "st"),
                ("\u{FB06}", "st"),
            ],
        }
    }

    /// Process raw page text through the enabled cleanup steps.
    ///
    /// Hyphenation repair runs first: it needs the original line breaks,
    /// which later stages (and normalization downstream) erase.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.fix_hyphenation {
            result = self.hyphen_break.replace_all(&result, "$1$2").into_owned();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        result
    }

    /// Check if any cleanup step is enabled.
    pub fn is_active(&self) -> bool {
        self.options.normalize_unicode
            || self.options.fix_ligatures
            || self.options.fix_hyphenation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let pipeline = CleanupPipeline::new(CleanupOptions::default());
        assert!(!pipeline.is_active());

        let text = "ra\u{FB01}nement hyphen-\nated";
        assert_eq!(pipeline.process(text), text);
    }

    #[test]
    fn test_fix_ligatures() {
        let pipeline = CleanupPipeline::new(CleanupOptions {
            fix_ligatures: true,
            ..Default::default()
        });
        assert_eq!(pipeline.process("e\u{FB03}cient \u{FB02}ow"), "efficient flow");
    }

    #[test]
    fn test_fix_hyphenation() {
        let pipeline = CleanupPipeline::new(CleanupOptions {
            fix_hyphenation: true,
            ..Default::default()
        });
        assert_eq!(pipeline.process("exam-\nple text"), "example text");
        // A dash before a digit or at a list marker is left alone.
        assert_eq!(pipeline.process("range 1-\n2"), "range 1-\n2");
    }

    #[test]
    fn test_nfc_normalization() {
        let pipeline = CleanupPipeline::new(CleanupOptions {
            normalize_unicode: true,
            ..Default::default()
        });
        // Decomposed e + combining acute becomes the precomposed form.
        assert_eq!(pipeline.process("cafe\u{0301}"), "caf\u{00E9}");
    }

    #[test]
    fn test_standard_enables_everything() {
        let pipeline = CleanupPipeline::new(CleanupOptions::standard());
        assert!(pipeline.is_active());
    }
}
