//! JSON Parser
//!
//! Thin wrapper over serde_json, configured so that object key order is
//! preserved exactly as it appears in the input. Parsing is the only
//! recoverable failure in the pipeline; callers log the error and abort.

use serde_json::Value;

/// Parse a document that already passed the sniffer.
///
/// Duplicate object keys keep the last occurrence, per standard JSON
/// parsing semantics.
pub fn parse_document(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let value = parse_document("{\"a\": 1, \"b\": [true, null]}").unwrap();
        assert_eq!(value, json!({"a": 1, "b": [true, null]}));
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let value = parse_document("  \n [1, 2] \n ").unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_parse_malformed_input() {
        assert!(parse_document("{\"a\": }").is_err());
        assert!(parse_document("[1, 2,]").is_err());
        assert!(parse_document("{").is_err());
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let value = parse_document("{\"a\": 1, \"a\": 2}").unwrap();
        assert_eq!(value, json!({"a": 2}));
    }
}
