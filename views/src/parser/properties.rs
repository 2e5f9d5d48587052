//! Property lines of a single block.

use crate::location::{Location, Position};
use crate::parser::line;
use crate::parser::structural::ParseState;
use crate::property::Property;
use crate::property::tags::{self, Tags};
use crate::property::value::Value;

impl ParseState<'_> {
    /// Read every property and comment line from `start` up to the next
    /// block line and attach them to block `id`.
    pub(super) fn parse_properties(&mut self, start: usize, id: usize) {
        let mut properties = Vec::new();
        let mut in_scope: Option<String> = None;

        let mut i = start;
        while i < self.lines.len() && !line::is_block(self.lines[i].text) {
            let current = self.lines[i];
            let text = current.text;
            i += 1;

            let loc = Location::new(
                Position::new(current.number, current.indent),
                Position::new(current.number, current.last_column()),
            );
            let span = current.offset..current.end_offset();

            if line::is_comment(text) {
                if self.options.skip_comments {
                    continue;
                }
                let user_comment = line::is_user_comment(text);
                let mut body = line::comment_text(text);
                if user_comment {
                    body = line::comment_text(body);
                }
                properties.push(Property {
                    name: String::new(),
                    name_raw: String::new(),
                    in_scope: in_scope.clone(),
                    tags: Tags::comment(user_comment),
                    value: Value::Text(body.to_string()),
                    loc,
                    span,
                });
                continue;
            }

            let Some((name_raw, raw_value)) = line::property_parts(text) else {
                continue;
            };

            let (name, stems) = tags::strip_stems(name_raw);
            let mut tags = tags::tags_for(&name, raw_value);
            tags.add_stems(stems);

            let property = Property {
                value: Value::parse(raw_value, tags.code),
                name,
                name_raw: name_raw.to_string(),
                in_scope: None,
                tags,
                loc,
                span,
            };

            if property.tags.code {
                self.props.record(&property);
                if property.tags.style {
                    self.arena[id].animated = true;
                }
            }

            if let Some(scope) = &property.tags.scope {
                log::trace!("scope `{}` opened on line {}", scope, current.number + 1);
                in_scope = Some(scope.clone());
            } else if let Some(scope) = &in_scope {
                // A repeated name under the same scope: the last one wins.
                self.arena[id]
                    .scoped
                    .entry(property.name_raw.clone())
                    .or_default()
                    .insert(scope.clone(), properties.len());
            }

            properties.push(Property {
                in_scope: in_scope.clone(),
                ..property
            });
        }

        self.scanned_until = i;

        let builder = &mut self.arena[id];
        if let Some(last) = properties.last() {
            builder.loc.end = last.loc.end;
            builder.span.end = builder.span.end.max(last.span.end);
        }
        self.fonts.register_block(&builder.capabilities, &properties);
        builder.properties = Some(properties);
    }
}
