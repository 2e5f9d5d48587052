use indexmap::IndexMap;
use serde::Serialize;

use crate::block::Block;
use crate::property::Property;
use crate::property::tags::slot_names;

const NUMERIC_PROPERTIES: &[&str] = &[
    "bottom",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "height",
    "left",
    "letterSpacing",
    "lineHeight",
    "opacity",
    "right",
    "top",
    "width",
    "zIndex",
];

const NUMERIC_SUFFIXES: &[&str] = &["Height", "Radius", "Size", "Width"];

/// Type inferred for a value read off `props`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    Function,
    Boolean,
    Number,
    String,
}

impl PropType {
    /// What a `props.x` reference inside `property` implies about `x`.
    pub fn of(property: &Property) -> PropType {
        let name = property.name.as_str();
        if property.tags.action {
            PropType::Function
        } else if property.is_scope_declaration() {
            PropType::Boolean
        } else if NUMERIC_PROPERTIES.contains(&name)
            || name.starts_with("margin")
            || name.starts_with("padding")
            || NUMERIC_SUFFIXES.iter().any(|s| name.ends_with(s))
        {
            PropType::Number
        } else {
            PropType::String
        }
    }
}

/// Prop name → inferred type. The first inference for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropTypes(IndexMap<String, PropType>);

impl PropTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, property: &Property) {
        if !property.tags.code {
            return;
        }
        let ty = PropType::of(property);
        for name in slot_names(&property.value.to_string()) {
            self.0.entry(name.to_string()).or_insert(ty);
        }
    }

    /// Record every property under `root`, in document order.
    pub fn record_tree(&mut self, root: &Block) {
        for block in root.descendants() {
            for property in &block.properties {
                self.record(property);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<PropType> {
        self.0.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
