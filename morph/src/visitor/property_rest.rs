use views::{Block, Property};

use super::Morph;
use crate::classify::resolve_value;
use crate::escape::safe;
use crate::walk::Cursor;

/// Attributes: every non-style property, and style properties handed to a
/// custom view, which styles itself. Svg blocks that take no stylesheet get
/// their style properties as attributes too.
pub(super) fn enter(morph: &mut Morph<'_>, property: &Property, block: &Block, cursor: &Cursor<'_>) {
    let unstyled = (block.is_svg() && morph.options.is_native()) || block.name == "SvgGroup";
    if property.tags.style && block.is_primitive() && !unstyled {
        return;
    }

    let Some((value, _)) = resolve_value(
        property,
        block,
        cursor,
        &mut morph.diagnostics,
        morph.file_id,
    ) else {
        return;
    };
    morph
        .compilation
        .render
        .push(format!(" {}={}", property.name_raw, safe(&value)));
}
