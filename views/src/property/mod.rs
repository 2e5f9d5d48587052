pub mod tags;
pub mod value;

use std::ops::Range;

use serde::Serialize;

use crate::location::Location;
use crate::property::tags::Tags;
use crate::property::value::Value;

/// A single `name: value` line (or a kept comment) belonging to a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Name with pseudo-state stems removed. Empty for comments.
    pub name: String,
    /// Name as written in the source. Empty for comments.
    pub name_raw: String,
    /// Scope this variant applies under; `None` for the base value.
    pub in_scope: Option<String>,
    pub tags: Tags,
    pub value: Value,
    pub loc: Location,
    #[serde(skip)]
    pub span: Range<usize>,
}

impl Property {
    pub fn is_comment(&self) -> bool {
        self.tags.comment
    }

    /// A `when` line rather than a value.
    pub fn is_scope_declaration(&self) -> bool {
        self.tags.scope.is_some()
    }
}
