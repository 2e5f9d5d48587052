use views::{Block, Diagnostic, DiagnosticKind, Property};

use super::Morph;
use crate::accumulator::Bucket;
use crate::classify::classify;
use crate::escape::{safe, safe_scope};
use crate::style::{allowed_style_keys, check_parent_stem, is_dynamic, style_key};
use crate::walk::Cursor;

pub(super) fn enter(morph: &mut Morph<'_>, property: &Property, block: &Block, cursor: &Cursor<'_>) {
    if !block.is_primitive()
        || (block.is_svg() && morph.options.is_native())
        || block.name == "SvgGroup"
    {
        return;
    }

    let code = property.tags.code;
    let Some(classification) = classify(
        property,
        block,
        cursor,
        &mut morph.diagnostics,
        morph.file_id,
    ) else {
        return;
    };

    if classification.is_prop {
        for (key, value) in &classification.values {
            morph.compilation.render.push(format!(" {}={}", key, safe(value)));
        }
        return;
    }
    if property.tags.shadow {
        return;
    }

    let key = style_key(property);
    if !allowed_style_keys(block, cursor).contains(&key) {
        morph.diagnostics.push(
            Diagnostic::new(
                DiagnosticKind::DisallowedPseudoState,
                format!("`{}` has no `{}` state", block.id_name(), key),
                property.span.clone(),
                property.loc.start,
                morph.file_id,
            )
            .with_note(format!("`{}` was not applied", property.name_raw)),
        );
        return;
    }

    let driven_by_parent =
        is_dynamic(property, block) && check_parent_stem(property, cursor).is_some();
    let bucket = if code || classification.is_scoped || driven_by_parent {
        Bucket::Dynamic
    } else {
        Bucket::Static
    };

    let Some(style_id) = cursor
        .current_id()
        .and_then(|id| morph.compilation.style_id(id))
        .map(str::to_string)
    else {
        return;
    };
    morph.compilation.styles.write(
        &style_id,
        key,
        bucket,
        classification
            .values
            .iter()
            .map(|(name, value)| (name.clone(), safe_scope(value))),
    );
}
