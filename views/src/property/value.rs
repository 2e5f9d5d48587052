use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+\.?\d*|\.\d+)$").expect("valid number pattern"));

static CODE_EXPLICIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{(.+)\}$").expect("valid code pattern"));

/// A property value, classified once at parse time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Text(String),
    /// A bound expression, braces already removed.
    Code(String),
}

impl Value {
    /// Classify a raw value. `code` comes from the property's tags.
    pub fn parse(raw: &str, code: bool) -> Value {
        if code {
            return Value::Code(unwrap_code(raw).to_string());
        }
        match raw {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ if NUMBER.is_match(raw) => raw
                .parse::<f64>()
                .map(Value::Number)
                .unwrap_or_else(|_| Value::Text(raw.to_string())),
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Value::Code(_))
    }

    /// The literal text, if this is a plain text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) | Value::Code(s) => write!(f, "{}", s),
        }
    }
}

/// `{expr}` → `expr`; anything else is returned untouched.
pub fn unwrap_code(raw: &str) -> &str {
    CODE_EXPLICIT
        .captures(raw)
        .and_then(|c| c.get(1))
        .map_or(raw, |m| m.as_str().trim())
}

pub fn is_code_explicit(raw: &str) -> bool {
    CODE_EXPLICIT.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_literals() {
        assert_eq!(Value::parse("12", false), Value::Number(12.0));
        assert_eq!(Value::parse("-0.5", false), Value::Number(-0.5));
        assert_eq!(Value::parse("true", false), Value::Boolean(true));
        assert_eq!(Value::parse("12px", false), Value::Text("12px".into()));
        assert_eq!(Value::parse("NaN", false), Value::Text("NaN".into()));
    }

    #[test]
    fn strips_braces_from_code() {
        assert_eq!(
            Value::parse("{props.color}", true),
            Value::Code("props.color".into())
        );
        assert_eq!(Value::parse("item.name", true), Value::Code("item.name".into()));
    }

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(Value::Number(400.0).to_string(), "400");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }
}
