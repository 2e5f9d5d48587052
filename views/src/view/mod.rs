pub mod fonts;
pub mod slots;

use serde::Serialize;

use crate::block::Block;
use crate::view::fonts::FontRegistry;
use crate::view::slots::PropTypes;

/// A completed top-level block with the fonts and props it uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub root: Block,
    pub fonts: FontRegistry,
    pub slots: PropTypes,
}

impl View {
    pub fn new(root: Block) -> Self {
        let mut fonts = FontRegistry::new();
        let mut slots = PropTypes::new();
        for block in root.descendants() {
            fonts.register_block(&block.capabilities, &block.properties);
        }
        slots.record_tree(&root);
        View { root, fonts, slots }
    }

    pub fn name(&self) -> &str {
        self.root.id_name()
    }
}
