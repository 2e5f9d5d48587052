pub mod error;
pub mod line;
mod properties;
mod structural;

pub use error::ParseError;

use crate::Parsed;

/// Knobs for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop comment lines instead of keeping them as comment properties.
    pub skip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            skip_comments: true,
        }
    }
}

/// Parser entry point.
pub struct Parser {
    source: String,
    file_id: usize,
    options: ParseOptions,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser {
            source,
            file_id,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse the source into views.
    ///
    /// CRLF is normalized to LF first; spans and positions refer to the
    /// normalized text. Structural problems never fail the parse, they end
    /// up in [`Parsed::diagnostics`].
    pub fn parse(&self) -> Result<Parsed, ParseError> {
        let text = self.source.replace("\r\n", "\n");
        if text.trim().is_empty() {
            return Err(ParseError::EmptySource);
        }
        Ok(structural::parse_views(&text, self.file_id, self.options))
    }
}
