pub mod accumulator;
pub mod classify;
pub mod compile;
pub mod error;
pub mod escape;
pub mod options;
pub mod scoped;
pub mod style;
pub mod visitor;
pub mod walk;

pub use accumulator::{Bucket, Compilation, Styles, Uses};
pub use compile::{Compiled, RESERVED_NAMES, compile, compile_view};
pub use error::{CompileError, ConfigError};
pub use options::{CompileOptions, Target};
pub use style::StyleKey;
