use indexmap::IndexMap;
use serde::Serialize;

use crate::block::capability::Capabilities;
use crate::property::Property;

const DEFAULT_WEIGHT: &str = "400";

/// Font family → weights used with it, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontRegistry(IndexMap<String, Vec<String>>);

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, family: &str, weight: &str) {
        let weights = self.0.entry(family.to_string()).or_default();
        if !weights.iter().any(|w| w == weight) {
            weights.push(weight.to_string());
        }
    }

    /// Register the font a block asks for, if it is fontable or not basic.
    pub fn register_block(&mut self, capabilities: &Capabilities, properties: &[Property]) {
        if !capabilities.is_fontable && capabilities.is_basic {
            return;
        }
        let base = |name: &str| {
            properties
                .iter()
                .find(|p| p.name == name && p.in_scope.is_none())
        };
        let Some(family) = base("fontFamily") else {
            return;
        };

        let family = main_font(&family.value.to_string());
        let weight = base("fontWeight")
            .map(|p| p.value.to_string())
            .unwrap_or_else(|| DEFAULT_WEIGHT.to_string());
        self.register(&family, &weight);
    }

    pub fn weights(&self, family: &str) -> Option<&[String]> {
        self.0.get(family).map(Vec::as_slice)
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First family of a CSS-style font stack, quotes removed.
pub fn main_font(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_font_takes_first_family() {
        assert_eq!(main_font("'Open Sans', Helvetica, sans-serif"), "Open Sans");
        assert_eq!(main_font("Roboto"), "Roboto");
    }

    #[test]
    fn weights_are_deduplicated_in_order() {
        let mut fonts = FontRegistry::new();
        fonts.register("Roboto", "700");
        fonts.register("Roboto", "400");
        fonts.register("Roboto", "700");
        assert_eq!(fonts.weights("Roboto").unwrap(), ["700", "400"]);
    }
}
