//! JSON Sniffer
//!
//! Lightweight heuristic check on leading characters to decide whether a
//! document is worth parsing at all, without paying for a full parse.

/// Decide whether a document looks like raw JSON.
///
/// True only if the first non-whitespace character is `{` or `[`.
/// Documents with a BOM or leading comments are rejected; that false
/// negative is acceptable here.
pub fn looks_like_json(text: &str) -> bool {
    matches!(text.trim_start().as_bytes().first(), Some(b'{') | Some(b'['))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_object_and_array() {
        assert!(looks_like_json("{\"a\": 1}"));
        assert!(looks_like_json("[1, 2, 3]"));
    }

    #[test]
    fn test_accepts_leading_whitespace() {
        assert!(looks_like_json("  \n\t {\"a\": 1}"));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(!looks_like_json("hello world"));
        assert!(!looks_like_json("<html><body>{}</body></html>"));
        assert!(!looks_like_json("\"just a string\""));
        assert!(!looks_like_json("42"));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(!looks_like_json(""));
        assert!(!looks_like_json("   \n  "));
    }

    #[test]
    fn test_rejects_bom_prefix() {
        assert!(!looks_like_json("\u{feff}{\"a\": 1}"));
    }
}
