mod collection;

use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};

pub use codespan_reporting::diagnostic::Severity;
pub use collection::Diagnostics;

use crate::location::Position;

/// What went wrong. The kind decides the default severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A block started while the innermost open block can't hold children.
    BlockInsideLeaf,
    /// A second block was placed inside a List.
    ListArity,
    /// A basic block was placed directly inside a List.
    BasicInList,
    /// A block started after the top block was already closed.
    OutsideTopBlock,
    /// A property line with no block to attach to.
    OrphanProperty,
    /// A line that is neither a block, a property, a comment nor an end marker.
    UnrecognizedLine,
    /// A view name that collides with a reserved identifier.
    ReservedName,
    /// A declared scope has no matching sibling property.
    ScopeResolutionMiss,
    /// A pseudo-state style the block can't react to.
    DisallowedPseudoState,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::ScopeResolutionMiss | DiagnosticKind::DisallowedPseudoState => {
                Severity::Error
            }
            _ => Severity::Warning,
        }
    }
}

/// A located, non-fatal message produced while parsing or compiling.
///
/// Parsing and compiling never stop on these; they are collected and handed
/// back next to the best-effort output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Range<usize>,
    pub position: Position,
    pub file_id: usize,
    pub severity: Severity,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        message: impl Into<String>,
        span: Range<usize>,
        position: Position,
        file_id: usize,
    ) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            span,
            position,
            file_id,
            severity: kind.severity(),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error | Severity::Bug)
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_codespan(&self) -> CodespanDiagnostic<usize> {
        CodespanDiagnostic::new(self.severity)
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)?;
        for note in &self.notes {
            write!(f, "\n  = {}", note)?;
        }
        Ok(())
    }
}
