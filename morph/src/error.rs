use thiserror::Error;

/// Compile failures that leave nothing to hand back. Everything recoverable
/// is a [`views::Diagnostic`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("no view to compile: the source has no top-level block")]
    NoView,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compile options: {0}")]
    Toml(#[from] toml::de::Error),
}
