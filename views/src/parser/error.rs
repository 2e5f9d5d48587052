use thiserror::Error;

/// Input the parser can't recover from. Everything else is a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the source is empty: there is nothing to parse")]
    EmptySource,
}
