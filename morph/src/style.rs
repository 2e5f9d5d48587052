//! Which pseudo-state bucket a style lands in, and which ones a block allows.

use std::fmt;

use serde::Serialize;
use views::property::tags::Stem;
use views::{Block, Property};

use crate::walk::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKey {
    Base,
    Hover,
    Focus,
    Placeholder,
    Disabled,
    Print,
}

impl StyleKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Base => "base",
            StyleKey::Hover => "hover",
            StyleKey::Focus => "focus",
            StyleKey::Placeholder => "placeholder",
            StyleKey::Disabled => "disabled",
            StyleKey::Print => "print",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Stem> for StyleKey {
    fn from(stem: Stem) -> Self {
        match stem {
            Stem::Hover => StyleKey::Hover,
            Stem::Focus => StyleKey::Focus,
            Stem::Placeholder => StyleKey::Placeholder,
            Stem::Disabled => StyleKey::Disabled,
            Stem::Print => StyleKey::Print,
        }
    }
}

const CAPTURE_KEYS: &[StyleKey] = &[
    StyleKey::Base,
    StyleKey::Focus,
    StyleKey::Hover,
    StyleKey::Disabled,
    StyleKey::Placeholder,
];
const ACTIONABLE_KEYS: &[StyleKey] = &[
    StyleKey::Base,
    StyleKey::Focus,
    StyleKey::Hover,
    StyleKey::Disabled,
];
const PLAIN_KEYS: &[StyleKey] = &[StyleKey::Base, StyleKey::Focus];

/// The first stem in precedence order, or `base`.
pub fn style_key(property: &Property) -> StyleKey {
    property.tags.first_stem().map_or(StyleKey::Base, StyleKey::from)
}

/// Buckets `block` may write to. `cursor` must be positioned on `block`.
pub fn allowed_style_keys(block: &Block, cursor: &Cursor<'_>) -> &'static [StyleKey] {
    if block.capabilities.is_capture {
        CAPTURE_KEYS
    } else if block.is_actionable() || actionable_ancestor(cursor).is_some() {
        ACTIONABLE_KEYS
    } else {
        PLAIN_KEYS
    }
}

/// Nearest block above the current one that carries an action.
pub fn actionable_ancestor<'t>(cursor: &Cursor<'t>) -> Option<&'t Block> {
    cursor.ancestors().find(|block| block.is_actionable())
}

/// A stemmed style whose state is driven from somewhere above its block.
pub fn is_dynamic(property: &Property, block: &Block) -> bool {
    !property.tags.stems.is_empty() && !block.is_actionable()
}

/// When the actionable ancestor driving `property` declares the same stem,
/// the ancestor's id name.
pub fn check_parent_stem<'t>(property: &Property, cursor: &Cursor<'t>) -> Option<&'t str> {
    let stem = property.tags.first_stem()?;
    let ancestor = actionable_ancestor(cursor)?;
    ancestor
        .properties
        .iter()
        .any(|p| p.tags.has_stem(stem))
        .then(|| ancestor.id_name())
}
