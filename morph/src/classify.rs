//! Deciding what a style property turns into.

use indexmap::IndexMap;
use views::property::tags::Stem;
use views::property::value::Value;
use views::{Block, Diagnostics, Property};

use crate::scoped::{self, ScopeDefault};
use crate::walk::Cursor;

/// Parts of a box shadow, in the order they are written.
const SHADOW_PARTS: [&str; 4] = ["shadowOffsetX", "shadowOffsetY", "shadowBlur", "shadowSpread"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Values are element attributes rather than styles.
    pub is_prop: bool,
    /// Values are conditional chains.
    pub is_scoped: bool,
    pub values: IndexMap<String, Value>,
}

/// The value `property` contributes once scopes are folded in, and whether
/// it is a chain. `None` when another property's chain already covers it.
pub fn resolve_value(
    property: &Property,
    block: &Block,
    cursor: &Cursor<'_>,
    diagnostics: &mut Diagnostics,
    file_id: usize,
) -> Option<(Value, bool)> {
    let has_scopes = block.scopes_for(&property.name_raw).is_some();

    match &property.in_scope {
        None if has_scopes => {
            let default = scoped::default_for(property, cursor);
            let chain = scoped::compose(property, block, default, diagnostics, file_id);
            Some((Value::Code(chain), true))
        }
        None => Some((property.value.clone(), false)),
        Some(_) if block.has_default(&property.name_raw) => None,
        Some(_) => {
            // Without a base value, the first variant speaks for all of them.
            let first = block.first_scoped(&property.name_raw)?;
            if !std::ptr::eq(first, property) {
                return None;
            }
            let chain = scoped::compose(property, block, ScopeDefault::Null, diagnostics, file_id);
            Some((Value::Code(chain), true))
        }
    }
}

/// Classify a style property of `block`. `cursor` must be positioned on
/// `block`.
pub fn classify(
    property: &Property,
    block: &Block,
    cursor: &Cursor<'_>,
    diagnostics: &mut Diagnostics,
    file_id: usize,
) -> Option<Classification> {
    let (value, is_scoped) = resolve_value(property, block, cursor, diagnostics, file_id)?;
    let capabilities = &block.capabilities;

    let attribute = match property.name.as_str() {
        "color" if capabilities.is_capture && property.tags.has_stem(Stem::Placeholder) => {
            Some("placeholderTextColor")
        }
        "selectionColor" if capabilities.is_capture => Some("selectionColor"),
        "resizeMode" if block.name == "Image" => Some("resizeMode"),
        _ => None,
    };

    let mut values = IndexMap::new();
    if let Some(key) = attribute {
        values.insert(key.to_string(), value);
        return Some(Classification {
            is_prop: true,
            is_scoped,
            values,
        });
    }

    if property.name == "shadowColor" {
        values.insert("boxShadow".to_string(), box_shadow(block, value));
    } else {
        values.insert(property.name.clone(), value);
    }

    Some(Classification {
        is_prop: false,
        is_scoped,
        values,
    })
}

/// `{x}px {y}px {blur}px {spread}px {color}` from the block's shadow parts.
/// Missing parts are `0`. Any bound part turns the whole into a template.
fn box_shadow(block: &Block, color: Value) -> Value {
    let parts: Vec<Value> = SHADOW_PARTS
        .iter()
        .map(|name| {
            block
                .property(name)
                .map_or(Value::Number(0.0), |p| p.value.clone())
        })
        .collect();

    let bound = color.is_code() || parts.iter().any(Value::is_code);
    let piece = |value: &Value| {
        if bound && value.is_code() {
            format!("${{{}}}", value)
        } else {
            value.to_string()
        }
    };

    let mut text: Vec<String> = parts.iter().map(|p| format!("{}px", piece(p))).collect();
    text.push(piece(&color));
    let text = text.join(" ");

    if bound {
        Value::Code(format!("`{}`", text))
    } else {
        Value::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_parts_default_to_zero() {
        let parsed = views::parse("Vertical\nshadowOffsetY: 2\nshadowBlur: 4\n").unwrap();
        let block = &parsed.views[0].root;
        assert_eq!(
            box_shadow(block, Value::Text("red".into())),
            Value::Text("0px 2px 4px 0px red".into())
        );
        assert_eq!(
            box_shadow(block, Value::Code("props.shade".into())),
            Value::Code("`0px 2px 4px 0px ${props.shade}`".into())
        );
    }
}
