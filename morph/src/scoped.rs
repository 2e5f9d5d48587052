//! Folding scoped variants of a property into one conditional expression.

use std::sync::LazyLock;

use regex::Regex;
use views::property::value::Value;
use views::{Block, Diagnostic, DiagnosticKind, Diagnostics, Property};

use crate::escape::safe_scope;
use crate::walk::Cursor;

static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bitem\b").expect("valid item pattern"));

/// What the chain falls back to when no scope holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDefault {
    /// The property's own value.
    Own,
    /// `null`: there is no base value to fall back to.
    Null,
}

/// `B ? vB : A ? vA : default`, with the last declared scope tested first.
///
/// Each scope uses the variant recorded in `block.scoped`, so a name repeated
/// under one scope resolves to its last line. Scopes whose variant can't be
/// found among `block`'s properties are left out and reported.
pub fn compose(
    property: &Property,
    block: &Block,
    default: ScopeDefault,
    diagnostics: &mut Diagnostics,
    file_id: usize,
) -> String {
    let mut chain = match default {
        ScopeDefault::Own => safe_scope(&property.value),
        ScopeDefault::Null => "null".to_string(),
    };

    let Some(variants) = block.scopes_for(&property.name_raw) else {
        return chain;
    };
    let mut ordered: Vec<(&String, usize)> = variants.iter().map(|(s, p)| (s, *p)).collect();
    ordered.sort_by_key(|(_, position)| *position);

    for (scope, position) in ordered {
        let candidate = block.properties.get(position).filter(|p| {
            p.in_scope.as_deref() == Some(scope.as_str())
                && p.name_raw == property.name_raw
                && !p.is_scope_declaration()
        });

        match candidate {
            Some(variant) => {
                chain = format!("{} ? {} : {}", scope, safe_scope(&variant.value), chain);
            }
            None => diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::ScopeResolutionMiss,
                    format!(
                        "`{}` is scoped under `{}` but has no value there",
                        property.name_raw, scope
                    ),
                    property.span.clone(),
                    property.loc.start,
                    file_id,
                )
                .with_note("the scope was left out of the conditional"),
            ),
        }
    }

    chain
}

/// The value resolves per item of an enclosing List, so a static default
/// would be wrong.
pub fn is_live(property: &Property, cursor: &Cursor<'_>) -> bool {
    let in_list = cursor
        .current()
        .into_iter()
        .map(|(_, block)| block)
        .chain(cursor.ancestors())
        .any(|block| block.capabilities.is_list);

    in_list && matches!(&property.value, Value::Code(code) if ITEM.is_match(code))
}

/// Which default a chain for `property` (owned by `block`) should use.
pub fn default_for(property: &Property, cursor: &Cursor<'_>) -> ScopeDefault {
    if property.in_scope.is_some() || is_live(property, cursor) {
        ScopeDefault::Null
    } else {
        ScopeDefault::Own
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(source: &str) -> Block {
        views::parse(source).unwrap().views.remove(0).root
    }

    #[test]
    fn later_scopes_are_tested_first() {
        let text = block("Text\ncolor: red\nwhen: props.a\ncolor: blue\nwhen: props.b\ncolor: green\n");
        let base = text.property("color").unwrap();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            compose(base, &text, ScopeDefault::Own, &mut diagnostics, 0),
            r#"props.b ? "green" : props.a ? "blue" : "red""#
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn repeated_name_in_a_scope_uses_the_last_line() {
        let text = block("Text\ncolor: red\nwhen: props.a\ncolor: blue\ncolor: green\n");
        let base = text.property("color").unwrap();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            compose(base, &text, ScopeDefault::Own, &mut diagnostics, 0),
            r#"props.a ? "green" : "red""#
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn null_default() {
        let text = block("Text\nwhen: props.a\ncolor: blue\n");
        let variant = text.first_scoped("color").unwrap();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            compose(variant, &text, ScopeDefault::Null, &mut diagnostics, 0),
            r#"props.a ? "blue" : null"#
        );
    }

    #[test]
    fn missing_variant_is_reported() {
        let mut text = block("Text\ncolor: red\nwhen: props.a\ncolor: blue\n");
        text.properties.pop();
        let base = text.property("color").unwrap().clone();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            compose(&base, &text, ScopeDefault::Own, &mut diagnostics, 0),
            r#""red""#
        );
        assert_eq!(diagnostics.of_kind(DiagnosticKind::ScopeResolutionMiss).len(), 1);
    }
}
