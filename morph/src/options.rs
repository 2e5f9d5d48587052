use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Backend the compilation is shaped for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Native,
    Dom,
}

impl Target {
    /// Attribute used to tag blocks for tests.
    pub fn test_id_key(self) -> &'static str {
        match self {
            Target::Native => "testID",
            Target::Dom => "data-testid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    pub target: Target,
    /// Emit test ids for blocks with a variant label.
    pub track: bool,
    /// Collect literal `Text` content into `locals`.
    pub locals: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            target: Target::Native,
            track: true,
            locals: false,
        }
    }
}

impl CompileOptions {
    /// Read options from TOML. Missing keys keep their defaults.
    ///
    /// ```toml
    /// target = "dom"
    /// track = false
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn is_native(&self) -> bool {
        self.target == Target::Native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(CompileOptions::from_toml_str("").unwrap(), CompileOptions::default());
    }

    #[test]
    fn reads_target_and_flags() {
        let options = CompileOptions::from_toml_str("target = \"dom\"\nlocals = true\n").unwrap();
        assert_eq!(options.target, Target::Dom);
        assert!(options.track);
        assert!(options.locals);
        assert_eq!(options.target.test_id_key(), "data-testid");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(CompileOptions::from_toml_str("colour = true").is_err());
    }
}
