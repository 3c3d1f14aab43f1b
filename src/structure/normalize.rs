//! Fragment normalization.

/// Collapse every maximal run of whitespace (space, tab, newline) into a
/// single space and trim the result.
///
/// Empty input yields an empty string. Idempotent:
/// `normalize(normalize(x)) == normalize(x)` for all `x`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a raw fragment into its first line and the remainder.
///
/// Normalization destroys internal line breaks, so first-line extraction
/// has to happen on the raw text; the caller normalizes the two halves
/// separately.
pub fn split_first_line(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a  b\tc\nd"), "a b c d");
        assert_eq!(normalize("  leading and trailing  "), "leading and trailing");
        assert_eq!(normalize("line one\n\n  line two"), "line one line two");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["", "  a  b  ", "x\ny\tz", "already normal"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_split_first_line() {
        assert_eq!(split_first_line("Title\nbody text"), ("Title", "body text"));
        assert_eq!(split_first_line("single line"), ("single line", ""));
        assert_eq!(
            split_first_line("Title\nline two\nline three"),
            ("Title", "line two\nline three")
        );
    }

    #[test]
    fn test_split_first_line_empty() {
        assert_eq!(split_first_line(""), ("", ""));
        assert_eq!(split_first_line("\nbody"), ("", "body"));
    }
}
