use serde::Serialize;

const GROUPS: &[&str] = &["Horizontal", "List", "Svg", "SvgGroup", "Vertical"];

const BASICS: &[&str] = &[
    "Image",
    "Proxy",
    "SvgCircle",
    "SvgEllipse",
    "SvgLine",
    "SvgPath",
    "SvgPolygon",
    "SvgPolyline",
    "SvgRect",
    "SvgText",
    "Text",
];

const CAPTURES: &[&str] = &[
    "Capture",
    "CaptureEmail",
    "CaptureFile",
    "CaptureInput",
    "CaptureNumber",
    "CapturePhone",
    "CaptureSecure",
    "CaptureText",
    "CaptureTextArea",
];

const FONTABLE: &[&str] = &[
    "CaptureEmail",
    "CaptureInput",
    "CaptureNumber",
    "CapturePhone",
    "CaptureSecure",
    "CaptureText",
    "CaptureTextArea",
    "SvgText",
    "Text",
];

/// What a block may do, derived from its kind name alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
    /// Built-in leaf; can't contain blocks.
    pub is_basic: bool,
    /// Built-in container.
    pub is_group: bool,
    /// Container holding at most one (non-basic) child.
    pub is_list: bool,
    /// Input that takes part in a capture chain.
    pub is_capture: bool,
    /// Text-bearing; its `fontFamily` feeds the font registry.
    pub is_fontable: bool,
}

impl Capabilities {
    pub fn of(name: &str) -> Self {
        let is_capture = CAPTURES.contains(&name);
        Capabilities {
            is_basic: is_capture || BASICS.contains(&name),
            is_group: GROUPS.contains(&name),
            is_list: name == "List",
            is_capture,
            is_fontable: FONTABLE.contains(&name),
        }
    }

    /// Built-in, as opposed to a custom (composite) view.
    pub fn is_primitive(&self) -> bool {
        self.is_basic || self.is_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_names() {
        let list = Capabilities::of("List");
        assert!(list.is_group && list.is_list && !list.is_basic);

        let capture = Capabilities::of("CaptureText");
        assert!(capture.is_basic && capture.is_capture && capture.is_fontable);

        let custom = Capabilities::of("ProfileCard");
        assert!(!custom.is_primitive());
    }
}
