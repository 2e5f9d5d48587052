use std::ops::Range;

use indexmap::IndexMap;

use crate::Parsed;
use crate::block::capability::Capabilities;
use crate::block::{Block, ScopedVariants, children_index};
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::location::{Location, Position};
use crate::parser::ParseOptions;
use crate::parser::line::{self, Line};
use crate::property::Property;
use crate::view::View;
use crate::view::fonts::FontRegistry;
use crate::view::slots::PropTypes;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse LF-normalized source text into views.
pub(crate) fn parse_views(source: &str, file_id: usize, options: ParseOptions) -> Parsed {
    let lines = line::split_lines(source);
    log::debug!("parsing {} lines (file {})", lines.len(), file_id);

    let mut state = ParseState::new(lines, file_id, options);
    state.process_lines();
    state.finalize()
}

// ---------------------------------------------------------------------------
// Parse state
// ---------------------------------------------------------------------------

pub(super) struct ParseState<'a> {
    pub(super) lines: Vec<Line<'a>>,
    pub(super) file_id: usize,
    pub(super) options: ParseOptions,
    /// Every block ever opened, addressed by index.
    pub(super) arena: Vec<BlockBuilder>,
    /// Open blocks. Innermost = last.
    stack: Vec<usize>,
    /// Completed top-level blocks.
    views: Vec<usize>,
    /// Last labelled capture block, for chaining.
    last_capture: Option<usize>,
    /// First line not consumed by the latest property scan.
    pub(super) scanned_until: usize,
    pub(super) fonts: FontRegistry,
    pub(super) props: PropTypes,
    pub(super) diagnostics: Diagnostics,
}

pub(super) struct BlockBuilder {
    name: String,
    is: Option<String>,
    pub(super) capabilities: Capabilities,
    children: Vec<usize>,
    /// `None` until the block's property lines have been parsed.
    pub(super) properties: Option<Vec<Property>>,
    pub(super) scoped: IndexMap<String, ScopedVariants>,
    children_index: Option<IndexMap<String, usize>>,
    capture_next: Option<String>,
    pub(super) animated: bool,
    pub(super) loc: Location,
    pub(super) span: Range<usize>,
}

impl BlockBuilder {
    fn new(name: &str, is: Option<&str>, line: &Line<'_>) -> Self {
        let start = Position::new(line.number, line.indent);
        BlockBuilder {
            name: name.to_string(),
            is: is.map(str::to_string),
            capabilities: Capabilities::of(name),
            children: Vec::new(),
            properties: None,
            scoped: IndexMap::new(),
            children_index: None,
            capture_next: None,
            animated: false,
            loc: Location::at(start),
            span: line.offset..line.end_offset(),
        }
    }

    fn id_name(&self) -> &str {
        self.is.as_deref().unwrap_or(&self.name)
    }
}

impl<'a> ParseState<'a> {
    fn new(lines: Vec<Line<'a>>, file_id: usize, options: ParseOptions) -> Self {
        ParseState {
            lines,
            file_id,
            options,
            arena: Vec::new(),
            stack: Vec::new(),
            views: Vec::new(),
            last_capture: None,
            scanned_until: 0,
            fonts: FontRegistry::new(),
            props: PropTypes::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    fn process_lines(&mut self) {
        for i in 0..self.lines.len() {
            let text = self.lines[i].text;

            if line::is_block(text) {
                self.parse_block(i);
            } else if line::is_property(text) || line::is_comment(text) {
                self.route_properties(i);
            } else if line::is_end(text) {
                if let Some(top) = self.stack.pop() {
                    self.end(top, i);
                }
            } else {
                self.warn_at_line(
                    DiagnosticKind::UnrecognizedLine,
                    format!("`{}` isn't a block, a property or a comment", text),
                    i,
                );
            }
        }

        // Close everything still open at end of input.
        let last = self.lines.len().saturating_sub(1);
        while let Some(top) = self.stack.pop() {
            self.end(top, last);
        }
    }

    /// Handle a block-start line.
    fn parse_block(&mut self, i: usize) {
        let line = self.lines[i];
        let Some((name, is)) = line::block_parts(line.text) else {
            return;
        };

        let id = self.arena.len();
        self.arena.push(BlockBuilder::new(name, is, &line));
        log::trace!("block `{}` at line {}", line.text, i + 1);

        if let Some(is) = is {
            if self.arena[id].capabilities.is_capture {
                if let Some(previous) = self.last_capture {
                    self.arena[previous].capture_next = Some(is.to_string());
                }
                self.last_capture = Some(id);
            }
        }

        let mut push_to_stack = false;

        if let Some(&top) = self.stack.last() {
            let parent = self.arena[top].capabilities;

            if parent.is_group {
                if parent.is_list && self.arena[id].capabilities.is_basic {
                    self.warn_block(
                        DiagnosticKind::BasicInList,
                        "A basic block can't be inside a List",
                        id,
                        ["put 1 empty line before"],
                    );
                    push_to_stack = true;
                } else if parent.is_list && !self.arena[top].children.is_empty() {
                    self.warn_block(
                        DiagnosticKind::ListArity,
                        "A List can only have one view inside. This block is outside of it",
                        id,
                        ["put 1 empty line before"],
                    );
                    push_to_stack = true;
                } else {
                    self.arena[top].children.push(id);
                }
            } else {
                // The open block can't hold children: close it first.
                self.stack.pop();
                self.end(top, i.saturating_sub(1));

                let outermost = self.views.first().or(self.stack.first()).copied();
                let outermost_is_group =
                    outermost.is_some_and(|v| self.arena[v].capabilities.is_group);
                let note = if !outermost_is_group {
                    "add a Vertical at the top"
                } else if i > 0 && self.lines[i - 1].text.is_empty() {
                    "put 1 empty line before"
                } else {
                    "put 2 empty lines before"
                };
                let message = format!(
                    "`{}` can't be nested inside `{}` because it isn't a group",
                    self.arena[id].name, self.arena[top].name
                );
                self.warn_block(DiagnosticKind::BlockInsideLeaf, message, id, [note]);
                push_to_stack = true;
            }
        } else if let Some(&first) = self.views.first() {
            // The block sits after the top-level block was closed.
            let mut blank_lines = 1;
            while i >= blank_lines && line::is_end(self.lines[i - blank_lines].text) {
                blank_lines += 1;
            }

            let mut notes = Vec::new();
            if !self.arena[first].capabilities.is_group {
                notes.push("add a Vertical at the top".to_string());
            }
            if blank_lines > 2 {
                let to_remove = blank_lines - 2;
                notes.push(format!(
                    "remove {} empty line{} before",
                    to_remove,
                    if to_remove > 1 { "s" } else { "" }
                ));
            }
            let message = format!(
                "`{}` is outside of the top block `{}`",
                self.arena[id].name,
                self.arena[first].id_name()
            );
            self.warn_block(DiagnosticKind::OutsideTopBlock, message, id, notes);
        }

        if self.arena[id].capabilities.is_group {
            push_to_stack = true;
        }

        if push_to_stack || self.stack.is_empty() {
            self.stack.push(id);
        }
    }

    /// Send a property or comment line to the block it belongs to.
    fn route_properties(&mut self, i: usize) {
        let Some(mut id) = self.stack.last().or(self.views.last()).copied() else {
            if line::is_property(self.lines[i].text) {
                self.warn_at_line(
                    DiagnosticKind::OrphanProperty,
                    "this property doesn't belong to any block",
                    i,
                );
            }
            return;
        };

        let builder = &self.arena[id];
        if builder.capabilities.is_group {
            if let Some(&last_child) = builder.children.last() {
                id = last_child;
            }
        }

        if self.arena[id].properties.is_none() {
            self.parse_properties(i, id);
        } else if i >= self.scanned_until && line::is_property(self.lines[i].text) {
            // The block was closed before this line: nothing will read it.
            let line = self.lines[i];
            self.diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::OrphanProperty,
                    format!("`{}` is already closed", self.arena[id].id_name()),
                    line.offset..line.end_offset(),
                    Position::new(line.number, line.indent),
                    self.file_id,
                )
                .with_note("move the property under its block"),
            );
        }
    }

    /// Close a block at `end_line`. Returns true when it completed a view.
    fn end(&mut self, id: usize, end_line: usize) -> bool {
        let line = self.lines[end_line];
        let child_names: Vec<String> = self.arena[id]
            .children
            .iter()
            .map(|&c| self.arena[c].id_name().to_string())
            .collect();

        let builder = &mut self.arena[id];
        builder.loc.end = Position::new(end_line, line.last_column());
        builder.span.end = builder.span.end.max(line.end_offset());

        if builder.capabilities.is_group && !builder.capabilities.is_basic {
            builder.children_index = children_index(child_names.iter().map(String::as_str));
        }
        builder.properties.get_or_insert_with(Vec::new);
        log::trace!("closed `{}` at line {}", builder.name, end_line + 1);

        if self.stack.is_empty() {
            self.views.push(id);
            return true;
        }
        false
    }

    fn finalize(mut self) -> Parsed {
        let mut slots: Vec<Option<BlockBuilder>> =
            std::mem::take(&mut self.arena).into_iter().map(Some).collect();

        let views: Vec<View> = self
            .views
            .iter()
            .filter_map(|&id| build_block(&mut slots, id))
            .map(View::new)
            .collect();

        log::debug!(
            "parsed {} view(s) with {} diagnostic(s)",
            views.len(),
            self.diagnostics.len()
        );

        Parsed {
            fonts: self.fonts,
            props: self.props,
            views,
            diagnostics: self.diagnostics,
            source_id: self.file_id,
        }
    }

    // -----------------------------------------------------------------------
    // Diagnostics
    // -----------------------------------------------------------------------

    fn warn_block<N: Into<String>>(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        id: usize,
        notes: impl IntoIterator<Item = N>,
    ) {
        let builder = &self.arena[id];
        let mut diagnostic = Diagnostic::new(
            kind,
            message,
            builder.span.clone(),
            builder.loc.start,
            self.file_id,
        );
        for note in notes {
            diagnostic = diagnostic.with_note(note);
        }
        self.diagnostics.push(diagnostic);
    }

    fn warn_at_line(&mut self, kind: DiagnosticKind, message: impl Into<String>, i: usize) {
        let line = self.lines[i];
        self.diagnostics.push(Diagnostic::new(
            kind,
            message,
            line.offset..line.end_offset(),
            Position::new(line.number, line.indent),
            self.file_id,
        ));
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Move a block and its subtree out of the arena.
fn build_block(slots: &mut [Option<BlockBuilder>], id: usize) -> Option<Block> {
    let builder = slots.get_mut(id)?.take()?;
    let children = builder
        .children
        .iter()
        .filter_map(|&child| build_block(slots, child))
        .collect();

    Some(Block {
        name: builder.name,
        is: builder.is,
        capabilities: builder.capabilities,
        children,
        properties: builder.properties.unwrap_or_default(),
        scoped: builder.scoped,
        children_index: builder.children_index,
        capture_next: builder.capture_next,
        animated: builder.animated,
        loc: builder.loc,
        span: builder.span,
    })
}
