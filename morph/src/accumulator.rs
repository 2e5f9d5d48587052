use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use views::view::fonts::FontRegistry;
use views::view::slots::PropTypes;

use crate::style::StyleKey;
use crate::walk::BlockId;

/// Block names every compile treats as already taken.
const TAKEN_NAMES: &[&str] = &["AutoSizer", "Column", "Table"];

/// Names a view depends on, in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Uses {
    names: IndexSet<String>,
    #[serde(skip)]
    owner: String,
}

impl Uses {
    pub fn new(owner: &str) -> Self {
        Uses {
            names: IndexSet::new(),
            owner: owner.to_string(),
        }
    }

    /// The view never depends on itself, nor on names bound through `props`.
    pub fn is_excluded(name: &str, owner: &str) -> bool {
        name == owner || name.contains("props")
    }

    /// Returns true when `name` was newly recorded.
    pub fn add(&mut self, name: &str) -> bool {
        if Self::is_excluded(name, &self.owner) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Where a style value ends up: known at compile time or computed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleBuckets {
    #[serde(rename = "static")]
    pub static_: IndexMap<String, String>,
    pub dynamic: IndexMap<String, String>,
}

impl StyleBuckets {
    pub fn get(&self, bucket: Bucket) -> &IndexMap<String, String> {
        match bucket {
            Bucket::Static => &self.static_,
            Bucket::Dynamic => &self.dynamic,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut IndexMap<String, String> {
        match bucket {
            Bucket::Static => &mut self.static_,
            Bucket::Dynamic => &mut self.dynamic,
        }
    }
}

/// Styles of one block, per pseudo-state.
pub type BlockStyle = IndexMap<StyleKey, StyleBuckets>;

/// Style id → per-state buckets, in first-write order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Styles(IndexMap<String, BlockStyle>);

impl Styles {
    /// Merge `values` into a bucket; later keys overwrite earlier ones.
    pub fn write(
        &mut self,
        style_id: &str,
        key: StyleKey,
        bucket: Bucket,
        values: impl IntoIterator<Item = (String, String)>,
    ) {
        let target = self
            .0
            .entry(style_id.to_string())
            .or_default()
            .entry(key)
            .or_default()
            .get_mut(bucket);
        for (name, value) in values {
            log::trace!("style {}.{:?} {:?}: {} = {}", style_id, key, bucket, name, value);
            target.insert(name, value);
        }
    }

    pub fn get(&self, style_id: &str) -> Option<&BlockStyle> {
        self.0.get(style_id)
    }

    /// A single value, if it was written.
    pub fn value(&self, style_id: &str, key: StyleKey, bucket: Bucket) -> Option<&str> {
        self.get(style_id)?
            .get(&key)?
            .get(bucket)
            .values()
            .next()
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_static(&self) -> bool {
        self.0
            .values()
            .flat_map(|block| block.values())
            .any(|buckets| !buckets.static_.is_empty())
    }
}

/// Everything one compile produces for a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub name: String,
    pub uses: Uses,
    pub styles: Styles,
    pub render: Vec<String>,
    /// Style id → literal text content.
    pub locals: IndexMap<String, String>,
    /// Style ids tagged for tests.
    pub test_ids: IndexSet<String>,
    pub svgs: Vec<String>,
    pub images: IndexSet<String>,
    pub fonts: FontRegistry,
    pub slots: PropTypes,
    #[serde(skip)]
    used_block_names: IndexMap<String, usize>,
    #[serde(skip)]
    style_ids: IndexMap<BlockId, String>,
}

impl Compilation {
    pub fn new(name: &str, fonts: FontRegistry, slots: PropTypes) -> Self {
        let mut used_block_names = IndexMap::new();
        used_block_names.insert(name.to_string(), 1);
        for taken in TAKEN_NAMES {
            used_block_names.insert((*taken).to_string(), 1);
        }

        Compilation {
            name: name.to_string(),
            uses: Uses::new(name),
            styles: Styles::default(),
            render: Vec::new(),
            locals: IndexMap::new(),
            test_ids: IndexSet::new(),
            svgs: Vec::new(),
            images: IndexSet::new(),
            fonts,
            slots,
            used_block_names,
            style_ids: IndexMap::new(),
        }
    }

    /// Give a block its style id: `is` or `name`, numbered when taken.
    pub fn register_block(&mut self, id: BlockId, base: &str) -> String {
        let style_id = match self.used_block_names.get_mut(base) {
            Some(count) => {
                let numbered = format!("{}{}", base, count);
                *count += 1;
                numbered
            }
            None => {
                self.used_block_names.insert(base.to_string(), 1);
                base.to_string()
            }
        };
        self.style_ids.insert(id, style_id.clone());
        style_id
    }

    pub fn style_id(&self, id: BlockId) -> Option<&str> {
        self.style_ids.get(&id).map(String::as_str)
    }

    /// The concatenated render fragments.
    pub fn render_text(&self) -> String {
        self.render.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_excludes_owner_and_props() {
        let mut uses = Uses::new("Card");
        assert!(uses.add("Text"));
        assert!(!uses.add("Text"));
        assert!(!uses.add("Card"));
        assert!(!uses.add("props.Icon"));
        assert_eq!(uses.iter().collect::<Vec<_>>(), vec!["Text"]);
    }

    #[test]
    fn style_ids_are_numbered_on_repeat() {
        let mut compilation = Compilation::new("Card", FontRegistry::new(), PropTypes::new());
        assert_eq!(compilation.register_block(BlockId(0), "Card"), "Card1");
        assert_eq!(compilation.register_block(BlockId(1), "Text"), "Text");
        assert_eq!(compilation.register_block(BlockId(2), "Text"), "Text1");
        assert_eq!(compilation.register_block(BlockId(3), "Text"), "Text2");
        assert_eq!(compilation.register_block(BlockId(4), "Table"), "Table1");
        assert_eq!(compilation.style_id(BlockId(2)), Some("Text1"));
    }
}
