//! The compile visitor: one handler per node kind, sharing one accumulator.

mod block;
mod property_rest;
mod property_style;

use views::{Block, Diagnostics, Property};

use crate::accumulator::Compilation;
use crate::options::CompileOptions;
use crate::walk::{Cursor, Flow, Visitor};

pub struct Morph<'o> {
    pub(crate) options: &'o CompileOptions,
    pub(crate) file_id: usize,
    pub(crate) compilation: Compilation,
    pub(crate) diagnostics: Diagnostics,
    /// Per open block: whether its opening tag has been closed with `>`.
    open_tags: Vec<bool>,
    saw_capture: bool,
}

impl<'o> Morph<'o> {
    pub fn new(compilation: Compilation, options: &'o CompileOptions, file_id: usize) -> Self {
        Morph {
            options,
            file_id,
            compilation,
            diagnostics: Diagnostics::new(),
            open_tags: Vec::new(),
            saw_capture: false,
        }
    }

    /// Record the framework pieces the walk turned out to need.
    pub fn finish(mut self) -> (Compilation, Diagnostics) {
        if self.options.is_native() {
            if self.saw_capture {
                self.compilation.uses.add("TextInput");
            }
            if self.compilation.styles.has_static() {
                self.compilation.uses.add("StyleSheet");
            }
        }
        (self.compilation, self.diagnostics)
    }
}

impl<'t> Visitor<'t> for Morph<'_> {
    fn enter_block(&mut self, block: &'t Block, cursor: &Cursor<'t>) -> Flow {
        block::enter(self, block, cursor);
        Flow::Descend
    }

    fn exit_block(&mut self, block: &'t Block, _cursor: &Cursor<'t>) {
        block::exit(self, block);
    }

    fn enter_property(&mut self, property: &'t Property, cursor: &Cursor<'t>) {
        let Some((_, block)) = cursor.current() else {
            return;
        };
        if property.is_comment() || property.is_scope_declaration() {
            return;
        }

        if property.tags.style {
            property_style::enter(self, property, block, cursor);
        }
        property_rest::enter(self, property, block, cursor);
    }
}
