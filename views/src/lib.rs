pub mod block;
pub mod diagnostic;
pub mod location;
pub mod parser;
pub mod property;
pub mod view;

use serde::Serialize;

pub use crate::block::Block;
pub use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use crate::parser::{ParseError, ParseOptions, Parser};
pub use crate::property::Property;
pub use crate::view::View;
use crate::view::fonts::FontRegistry;
use crate::view::slots::PropTypes;

/// The result of parsing one views source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed {
    /// Fonts used anywhere in the source, family → weights.
    pub fonts: FontRegistry,
    /// Values read off `props` anywhere in the source.
    pub props: PropTypes,
    /// Completed top-level blocks, in source order.
    pub views: Vec<View>,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
    /// The source file ID (for error reporting with codespan-reporting).
    #[serde(skip)]
    pub source_id: usize,
}

impl Parsed {
    /// The first view, which is the one a source compiles to.
    pub fn main_view(&self) -> Option<&View> {
        self.views.first()
    }
}

/// Parse `source` with default options.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    Parser::new(source.to_string(), 0).parse()
}
