//! Turning property values into expression text.

use views::property::value::Value;

/// A JSON string literal.
pub fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Attribute form: text becomes `"…"`, everything else `{…}`.
pub fn safe(value: &Value) -> String {
    match value {
        Value::Text(text) => quote(text),
        other => format!("{{{}}}", other),
    }
}

/// Expression form, for use inside a conditional chain.
pub fn safe_scope(value: &Value) -> String {
    match value {
        Value::Text(text) => quote(text),
        other => other.to_string(),
    }
}
