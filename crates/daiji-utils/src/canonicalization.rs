//! Canonical JSON emission.

use anyhow::{Context, Result};
use serde::Serialize;

/// Emit a value as JCS-canonical JSON (RFC 8785).
///
/// JCS ensures deterministic output regardless of field ordering in the source
/// struct, so `daiji --json` is byte-stable across releases.
///
/// # Example
///
/// ```rust
/// use daiji_utils::canonicalization::emit_jcs;
/// use daiji_utils::types::ComposeOutput;
///
/// let output = ComposeOutput {
///     number: 0,
///     mode: Some(1),
///     selection: "1".into(),
///     text: "零".into(),
/// };
/// let json = emit_jcs(&output).expect("serialization should succeed");
/// assert_eq!(json, r#"{"mode":1,"number":0,"selection":"1","text":"零"}"#);
/// ```
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}
