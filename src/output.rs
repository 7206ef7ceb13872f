//! Output rendering for generated CFIDs.

use serde::Serialize;
use serde_json::Value;

/// JSON key under which the identifier is emitted.
pub const ID_KEY: &str = "aha.id";

/// Machine-readable emission payload: a single-key object keyed by
/// [`ID_KEY`].
#[derive(Debug, Clone, Serialize)]
pub struct IdRecord<'a> {
    #[serde(rename = "aha.id")]
    pub id: &'a str,
}

/// Plain-text emission: `Generated ID: <cfid>`.
pub fn render_plain(cfid: &str) -> String {
    format!("Generated ID: {}", cfid)
}

/// Machine-readable emission: `{"aha.id": "<cfid>"}`.
pub fn render_json(cfid: &str) -> serde_json::Result<String> {
    serde_json::to_string(&IdRecord { id: cfid })
}

/// Canonical conversion of a dynamic JSON value to a plain string.
///
/// This is the library-level conversion contract for consumers that flatten
/// CFID-bearing metadata objects into plain attribute strings: strings are
/// taken verbatim (no surrounding quotes), numbers and booleans use their
/// canonical JSON textual form, null becomes the empty string, and
/// arrays/objects use their compact JSON serialization. One conversion,
/// applied uniformly, wherever a dynamic value must become text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
