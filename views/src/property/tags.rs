use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::property::value::{is_code_explicit, unwrap_code};

/// Name of the property that opens a scope: `when: <condition>`.
pub const SCOPE_PROPERTY: &str = "when";

static CODE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:props|item)\.\w|^(?:props|item|index)$|\bindex\b\s*[-+*/%<>=!]")
        .expect("valid keyword pattern")
});

static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprops\.(\w+)").expect("valid slot pattern"));

static ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^on[A-Z]\w*$").expect("valid action pattern"));

const STYLE_PROPERTIES: &[&str] = &[
    "alignContent",
    "alignItems",
    "alignSelf",
    "backgroundColor",
    "backgroundImage",
    "backgroundPosition",
    "backgroundRepeat",
    "backgroundSize",
    "borderBottomColor",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomStyle",
    "borderBottomWidth",
    "borderColor",
    "borderLeftColor",
    "borderLeftStyle",
    "borderLeftWidth",
    "borderRadius",
    "borderRightColor",
    "borderRightStyle",
    "borderRightWidth",
    "borderStyle",
    "borderTopColor",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopStyle",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "color",
    "cursor",
    "display",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "height",
    "justifyContent",
    "left",
    "letterSpacing",
    "lineHeight",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "opacity",
    "overflow",
    "overflowX",
    "overflowY",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "position",
    "resizeMode",
    "right",
    "selectionColor",
    "shadowBlur",
    "shadowColor",
    "shadowOffsetX",
    "shadowOffsetY",
    "shadowSpread",
    "textAlign",
    "textDecoration",
    "textTransform",
    "top",
    "transform",
    "userSelect",
    "whiteSpace",
    "width",
    "zIndex",
];

/// Parts folded into `shadowColor`; never emitted on their own.
const SHADOW_PARTS: &[&str] = &["shadowBlur", "shadowOffsetX", "shadowOffsetY", "shadowSpread"];

/// Pseudo-state a style applies under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Hover,
    Focus,
    Placeholder,
    Disabled,
    Print,
}

impl Stem {
    /// When a property carries several stems, the first one here wins.
    pub const PRECEDENCE: [Stem; 5] = [
        Stem::Hover,
        Stem::Focus,
        Stem::Placeholder,
        Stem::Disabled,
        Stem::Print,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stem::Hover => "hover",
            Stem::Focus => "focus",
            Stem::Placeholder => "placeholder",
            Stem::Disabled => "disabled",
            Stem::Print => "print",
        }
    }

    /// How the stem is spelled at the end of a property name.
    fn suffix(self) -> &'static str {
        match self {
            Stem::Hover => "Hover",
            Stem::Focus => "Focus",
            Stem::Placeholder => "Placeholder",
            Stem::Disabled => "Disabled",
            Stem::Print => "Print",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub style: bool,
    pub code: bool,
    /// Code that reads a value passed in through `props`.
    pub slot: bool,
    pub action: bool,
    pub shadow: bool,
    /// Condition opened by a `when` property.
    pub scope: Option<String>,
    pub stems: Vec<Stem>,
    pub comment: bool,
    pub user_comment: bool,
}

impl Tags {
    pub fn comment(user_comment: bool) -> Self {
        Tags {
            comment: true,
            user_comment,
            ..Tags::default()
        }
    }

    pub fn has_stem(&self, stem: Stem) -> bool {
        self.stems.contains(&stem)
    }

    /// The stem that decides the style bucket.
    pub fn first_stem(&self) -> Option<Stem> {
        Stem::PRECEDENCE.into_iter().find(|stem| self.has_stem(*stem))
    }

    pub fn add_stems(&mut self, stems: impl IntoIterator<Item = Stem>) {
        for stem in stems {
            if !self.stems.contains(&stem) {
                self.stems.push(stem);
            }
        }
    }
}

/// Tags derived from a (stem-stripped) name and its raw value.
pub fn tags_for(name: &str, value: &str) -> Tags {
    let code = is_code(value);
    Tags {
        style: is_style(name),
        code,
        slot: code && SLOT.is_match(value),
        action: is_action(name),
        shadow: SHADOW_PARTS.contains(&name),
        scope: (name == SCOPE_PROPERTY).then(|| unwrap_code(value).to_string()),
        ..Tags::default()
    }
}

/// Peel pseudo-state suffixes off a style property name.
///
/// `colorDisabledHover` → (`color`, [hover, disabled]). Names whose remainder
/// isn't a style property come back untouched.
pub fn strip_stems(raw: &str) -> (String, Vec<Stem>) {
    let mut name = raw;
    let mut stems = Vec::new();

    while let Some((rest, stem)) = Stem::PRECEDENCE
        .into_iter()
        .find_map(|stem| name.strip_suffix(stem.suffix()).map(|rest| (rest, stem)))
    {
        if rest.is_empty() {
            break;
        }
        stems.push(stem);
        name = rest;
    }

    if stems.is_empty() || !is_style(name) {
        return (raw.to_string(), Vec::new());
    }
    (name.to_string(), stems)
}

pub fn is_style(name: &str) -> bool {
    STYLE_PROPERTIES.contains(&name)
}

pub fn is_action(name: &str) -> bool {
    ACTION.is_match(name)
}

pub fn is_code(value: &str) -> bool {
    is_code_explicit(value) || CODE_KEYWORD.is_match(value)
}

/// Names read off `props` in a code value, in order of appearance.
pub fn slot_names(value: &str) -> impl Iterator<Item = &str> {
    SLOT.captures_iter(value)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}
