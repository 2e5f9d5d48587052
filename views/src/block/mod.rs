pub mod capability;

use std::ops::Range;

use indexmap::IndexMap;
use serde::Serialize;

use crate::block::capability::Capabilities;
use crate::location::Location;
use crate::property::Property;

/// Scope label → position of the variant in the block's property list.
pub type ScopedVariants = IndexMap<String, usize>;

/// One UI element or container, as written on a block-start line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Kind name (`Vertical`, `Text`, a custom view name, …).
    pub name: String,
    /// Variant label from `Name as Variant`.
    pub is: Option<String>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
    /// Only groups hold children.
    pub children: Vec<Block>,
    pub properties: Vec<Property>,
    /// Raw property name → scoped variants of it.
    pub scoped: IndexMap<String, ScopedVariants>,
    /// Child name → child index, for groups with children.
    pub children_index: Option<IndexMap<String, usize>>,
    /// Variant label of the capture opened after this one.
    pub capture_next: Option<String>,
    /// Some property is both a style and bound code.
    pub animated: bool,
    pub loc: Location,
    #[serde(skip)]
    pub span: Range<usize>,
}

impl Block {
    /// The variant label when present, the kind name otherwise.
    pub fn id_name(&self) -> &str {
        self.is.as_deref().unwrap_or(&self.name)
    }

    pub fn is_primitive(&self) -> bool {
        self.capabilities.is_primitive()
    }

    pub fn is_svg(&self) -> bool {
        self.name.starts_with("Svg")
    }

    /// Carries an event handler such as `onClick`.
    pub fn is_actionable(&self) -> bool {
        self.properties.iter().any(|p| p.tags.action)
    }

    /// The unscoped property with this name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name == name && p.in_scope.is_none())
    }

    /// Whether `name_raw` has a base (unscoped) declaration.
    pub fn has_default(&self, name_raw: &str) -> bool {
        self.properties
            .iter()
            .any(|p| p.name_raw == name_raw && p.in_scope.is_none())
    }

    pub fn scopes_for(&self, name_raw: &str) -> Option<&ScopedVariants> {
        self.scoped.get(name_raw)
    }

    /// The first scoped variant of `name_raw`, in declaration order.
    pub fn first_scoped(&self, name_raw: &str) -> Option<&Property> {
        self.properties.iter().find(|p| {
            p.name_raw == name_raw && p.in_scope.is_some() && !p.is_scope_declaration()
        })
    }

    /// Depth-first, document-order iteration over this block and its descendants.
    pub fn descendants(&self) -> Vec<&Block> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}

/// Name children by `is`/`name`; repeats get `1`, `2`, … appended.
pub fn children_index<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Option<IndexMap<String, usize>> {
    let mut index = IndexMap::new();

    for (i, base) in names.into_iter().enumerate() {
        let mut name = base.to_string();
        let mut next = 1;
        while index.contains_key(&name) {
            name = format!("{}{}", base, next);
            next += 1;
        }
        index.insert(name, i);
    }

    if index.is_empty() { None } else { Some(index) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_index_suffixes_repeats() {
        let index = children_index(["Text", "Title", "Text", "Text"]).unwrap();
        let names: Vec<_> = index.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(
            names,
            vec![("Text", 0), ("Title", 1), ("Text1", 2), ("Text2", 3)]
        );
    }

    #[test]
    fn children_index_is_none_without_children() {
        assert_eq!(children_index(std::iter::empty()), None);
    }
}
