//! Canonical Pretty-Printer
//!
//! Produces the single textual serialization the rest of the pipeline works
//! from: 2-space indentation, object keys in parse order, standard JSON
//! literal formatting. Deterministic for a given value.

use serde_json::Value;

/// Serialize a parsed value to canonical pretty text.
///
/// serde_json's pretty printer already uses 2-space indentation and a
/// `": "` key separator, which is exactly the canonical form; key order is
/// parse order because the crate is built with `preserve_order`.
pub fn to_pretty(value: &Value) -> String {
    // Serializing a Value that was itself produced by parsing cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_default()
}
