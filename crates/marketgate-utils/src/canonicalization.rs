use anyhow::{Context, Result};
use serde::Serialize;

/// Emit a value as JCS-canonical JSON (RFC 8785).
///
/// Every `--json` output of the CLI goes through this function so key order
/// and number formatting are stable regardless of struct field order.
///
/// ```rust
/// use marketgate_utils::canonicalization::emit_jcs;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Out {
///     platform: &'static str,
///     hide_payments: bool,
/// }
///
/// let json = emit_jcs(&Out { platform: "ios", hide_payments: true }).unwrap();
/// assert_eq!(json, r#"{"hide_payments":true,"platform":"ios"}"#);
/// ```
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}
