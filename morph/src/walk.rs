//! Depth-first traversal of a view tree.
//!
//! Rules:
//! 1. Order is document order: a block, then its properties, then its child
//!    blocks.
//! 2. Every reachable node is entered and exited exactly once.
//! 3. Returning [`Flow::Skip`] from `enter_block` prunes the block's contents;
//!    `exit_block` still runs.

use serde::Serialize;
use views::{Block, Property};

/// Document-order index of a block within one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(pub usize);

#[derive(Debug, Clone, Copy)]
pub enum Node<'t> {
    Block(&'t Block),
    Property(&'t Property),
}

impl<'t> Node<'t> {
    /// Properties first, then child blocks. Properties have no children.
    pub fn children(self) -> Vec<Node<'t>> {
        match self {
            Node::Block(block) => block
                .properties
                .iter()
                .map(Node::Property)
                .chain(block.children.iter().map(Node::Block))
                .collect(),
            Node::Property(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Descend,
    Skip,
}

/// Where the walk is. The innermost block on the path is the one being
/// entered, or the one owning the property being visited.
#[derive(Debug, Default)]
pub struct Cursor<'t> {
    path: Vec<(BlockId, &'t Block)>,
    next: usize,
}

impl<'t> Cursor<'t> {
    fn push(&mut self, block: &'t Block) -> BlockId {
        let id = BlockId(self.next);
        self.next += 1;
        self.path.push((id, block));
        id
    }

    fn pop(&mut self) {
        self.path.pop();
    }

    pub fn current(&self) -> Option<(BlockId, &'t Block)> {
        self.path.last().copied()
    }

    pub fn current_id(&self) -> Option<BlockId> {
        self.current().map(|(id, _)| id)
    }

    /// The block containing the current one.
    pub fn parent(&self) -> Option<&'t Block> {
        self.ancestors().next()
    }

    /// Blocks strictly above the current one, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'t Block> + '_ {
        self.path
            .iter()
            .rev()
            .skip(1)
            .map(|(_, block)| *block)
    }
}

/// Per-kind handlers. Defaults descend and do nothing else.
pub trait Visitor<'t> {
    fn enter_block(&mut self, _block: &'t Block, _cursor: &Cursor<'t>) -> Flow {
        Flow::Descend
    }

    fn exit_block(&mut self, _block: &'t Block, _cursor: &Cursor<'t>) {}

    fn enter_property(&mut self, _property: &'t Property, _cursor: &Cursor<'t>) {}

    fn exit_property(&mut self, _property: &'t Property, _cursor: &Cursor<'t>) {}
}

pub fn walk<'t, V: Visitor<'t> + ?Sized>(root: &'t Block, visitor: &mut V) {
    let mut cursor = Cursor::default();
    walk_node(visitor, Node::Block(root), &mut cursor);
}

pub fn walk_node<'t, V: Visitor<'t> + ?Sized>(
    visitor: &mut V,
    node: Node<'t>,
    cursor: &mut Cursor<'t>,
) {
    match node {
        Node::Block(block) => walk_block(visitor, block, cursor),
        Node::Property(property) => {
            visitor.enter_property(property, cursor);
            visitor.exit_property(property, cursor);
        }
    }
}

pub fn walk_block<'t, V: Visitor<'t> + ?Sized>(
    visitor: &mut V,
    block: &'t Block,
    cursor: &mut Cursor<'t>,
) {
    cursor.push(block);
    if visitor.enter_block(block, cursor) == Flow::Descend {
        for child in Node::Block(block).children() {
            walk_node(visitor, child, cursor);
        }
    }
    visitor.exit_block(block, cursor);
    cursor.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl<'t> Visitor<'t> for Trace {
        fn enter_block(&mut self, block: &'t Block, cursor: &Cursor<'t>) -> Flow {
            let id = cursor.current_id().map_or(usize::MAX, |id| id.0);
            self.0.push(format!("+{}#{}", block.id_name(), id));
            if block.name == "Horizontal" {
                Flow::Skip
            } else {
                Flow::Descend
            }
        }

        fn exit_block(&mut self, block: &'t Block, _cursor: &Cursor<'t>) {
            self.0.push(format!("-{}", block.id_name()));
        }

        fn enter_property(&mut self, property: &'t Property, cursor: &Cursor<'t>) {
            let owner = cursor.current().map_or("", |(_, b)| b.id_name());
            self.0.push(format!("{}.{}", owner, property.name));
        }
    }

    #[test]
    fn visits_in_document_order() {
        let parsed = views::parse(
            "Vertical\nwidth: 10\nText\ntext: a\nHorizontal\nText as Hidden\ntext: b\n",
        )
        .unwrap();
        let mut trace = Trace::default();
        walk(&parsed.views[0].root, &mut trace);

        assert_eq!(
            trace.0,
            vec![
                "+Vertical#0",
                "Vertical.width",
                "+Text#1",
                "Text.text",
                "-Text",
                "+Horizontal#2",
                "-Horizontal",
                "-Vertical",
            ]
        );
    }
}
