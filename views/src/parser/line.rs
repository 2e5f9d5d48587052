//! Line classification. Every function takes an already trimmed line.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-zA-Z0-9]*)(?:\s+as\s+([A-Z][a-zA-Z0-9]*))?$")
        .expect("valid block pattern")
});

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-zA-Z0-9]*)\s*:\s*(.*)$").expect("valid property pattern")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*(.*)$").expect("valid comment pattern"));

const END: &str = "end";

/// A physical source line, trimmed, with where it sits in the source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub text: &'a str,
    /// Zero-based line number.
    pub number: usize,
    /// Byte offset of the first non-blank character.
    pub offset: usize,
    /// Column of the first non-blank character.
    pub indent: usize,
}

impl Line<'_> {
    /// Byte offset just past the last non-blank character.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Column of the last character (0 for an empty line).
    pub fn last_column(&self) -> usize {
        self.indent + self.text.chars().count().saturating_sub(1)
    }
}

/// Split LF-normalized source into trimmed lines.
pub(crate) fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for (number, raw) in source.split('\n').enumerate() {
        let leading = raw.len() - raw.trim_start().len();
        lines.push(Line {
            text: raw.trim(),
            number,
            offset: offset + leading,
            indent: raw[..leading].chars().count(),
        });
        offset += raw.len() + 1;
    }

    lines
}

pub fn is_block(line: &str) -> bool {
    BLOCK.is_match(line)
}

pub fn is_property(line: &str) -> bool {
    PROPERTY.is_match(line)
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// A comment whose text is itself a comment: `# # note`.
pub fn is_user_comment(line: &str) -> bool {
    is_comment(line) && is_comment(comment_text(line))
}

pub fn is_end(line: &str) -> bool {
    line.is_empty() || line == END
}

/// `Name` → (`Name`, None); `Name as Variant` → (`Name`, Some(`Variant`)).
pub fn block_parts(line: &str) -> Option<(&str, Option<&str>)> {
    let caps = BLOCK.captures(line)?;
    let name = caps.get(1)?.as_str();
    Some((name, caps.get(2).map(|m| m.as_str())))
}

/// `name: value` → (`name`, `value`).
pub fn property_parts(line: &str) -> Option<(&str, &str)> {
    let caps = PROPERTY.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2).map_or("", |m| m.as_str())))
}

/// Text after the comment marker.
pub fn comment_text(line: &str) -> &str {
    COMMENT
        .captures(line)
        .and_then(|c| c.get(1))
        .map_or(line, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_lines() {
        assert!(is_block("Vertical"));
        assert!(is_block("CaptureText as Email"));
        assert!(!is_block("Vertical as"));
        assert!(is_property("color: red"));
        assert!(is_property("text:"));
        assert!(!is_property("Color: red"));
        assert!(is_comment("# hello"));
        assert!(is_user_comment("# # hello"));
        assert!(!is_user_comment("# hello"));
        assert!(is_end(""));
        assert!(is_end("end"));
        assert!(!is_end("ending"));
    }

    #[test]
    fn splits_parts() {
        assert_eq!(block_parts("Text as Title"), Some(("Text", Some("Title"))));
        assert_eq!(block_parts("Text"), Some(("Text", None)));
        assert_eq!(property_parts("text: Hello: world"), Some(("text", "Hello: world")));
        assert_eq!(property_parts("text:"), Some(("text", "")));
        assert_eq!(comment_text(comment_text("# # note")), "note");
    }

    #[test]
    fn tracks_offsets_and_indent() {
        let lines = split_lines("Vertical\n  color: red\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "color: red");
        assert_eq!(lines[1].offset, 11);
        assert_eq!(lines[1].indent, 2);
        assert_eq!(lines[1].end_offset(), 21);
        assert_eq!(lines[2].text, "");
    }
}
