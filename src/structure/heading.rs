//! Heading classification.
//!
//! A bounded set of cheap, deterministic heuristics deciding whether a
//! line of text is a structural title. Misclassification on unusual
//! input is expected; correctness means reproducibility, not linguistic
//! accuracy.

use regex::Regex;

/// Structural keywords recognized by the keyword rule.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "introduction",
    "summary",
    "conclusion",
    "background",
    "methodology",
    "results",
    "discussion",
    "references",
];

/// Heading classifier configuration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Maximum trimmed length (chars) for the shout rule
    pub shout_max_len: usize,
    /// Maximum word count for the label rule
    pub label_max_words: usize,
    /// Keyword vocabulary matched case-insensitively at line start
    pub keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            shout_max_len: 60,
            label_max_words: 6,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Classifies lines of text as structural headings or body text.
///
/// The decision is the logical OR of three rules: the shout rule (short
/// and mostly uppercase), the label rule (few words, capitalized, ends
/// with a colon), and the keyword rule (starts with a structural
/// keyword). Pure and total; empty input is never a heading.
pub struct HeadingClassifier {
    config: ClassifierConfig,
    keyword_regex: Regex,
}

impl HeadingClassifier {
    /// Create a classifier with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with a custom configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        let alternation = config
            .keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("(?i)^(?:{})(?::|\\s)?", alternation);
        let keyword_regex = Regex::new(&pattern).expect("keyword alternation is a valid pattern");

        Self {
            config,
            keyword_regex,
        }
    }

    /// Decide whether a line of text is a structural heading.
    pub fn is_heading(&self, line: &str) -> bool {
        let txt = line.trim();
        if txt.is_empty() {
            return false;
        }

        self.is_shout(txt) || self.is_label(txt) || self.is_keyword(txt)
    }

    /// Shout rule: short line where uppercase letters outnumber the rest.
    fn is_shout(&self, txt: &str) -> bool {
        let total = txt.chars().count();
        if total > self.config.shout_max_len {
            return false;
        }
        let upper = txt.chars().filter(|c| c.is_uppercase()).count();
        2 * upper > total
    }

    /// Label rule: 1..=N words, capitalized first character, trailing colon.
    fn is_label(&self, txt: &str) -> bool {
        let words = txt.split_whitespace().count();
        (1..=self.config.label_max_words).contains(&words)
            && txt.chars().next().is_some_and(|c| c.is_uppercase())
            && txt.ends_with(':')
    }

    /// Keyword rule: starts with one of the structural keywords.
    ///
    /// An empty vocabulary disables the rule; the compiled alternation
    /// would otherwise match every line.
    fn is_keyword(&self, txt: &str) -> bool {
        !self.config.keywords.is_empty() && self.keyword_regex.is_match(txt)
    }

    /// Get the classifier configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}
