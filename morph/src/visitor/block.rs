use views::Block;
use views::property::value::Value;

use super::Morph;
use crate::escape::quote;
use crate::walk::Cursor;

pub(super) fn enter(morph: &mut Morph<'_>, block: &Block, cursor: &Cursor<'_>) {
    // The first child closes the parent's opening tag.
    if let Some(opened) = morph.open_tags.last_mut() {
        if !*opened {
            morph.compilation.render.push(">".to_string());
            *opened = true;
        }
    }
    morph.open_tags.push(false);

    let Some(id) = cursor.current_id() else {
        return;
    };
    let style_id = morph.compilation.register_block(id, block.id_name());
    log::trace!("block {} as {}", block.name, style_id);

    morph.compilation.uses.add(&block.name);
    morph.compilation.render.push(format!("<{}", block.name));

    if block.is.is_some() && morph.options.track {
        let test_id = format!("{}.{}", morph.compilation.name, style_id);
        morph.compilation.render.push(format!(
            " {}={}",
            morph.options.target.test_id_key(),
            quote(&test_id)
        ));
        morph.compilation.test_ids.insert(style_id.clone());
    }

    match block.name.as_str() {
        "Svg" => morph.compilation.svgs.push(style_id.clone()),
        "Image" => {
            if let Some(Value::Text(source)) = block.property("source").map(|p| &p.value) {
                morph.compilation.images.insert(source.clone());
            }
        }
        "Text" if morph.options.locals => {
            if let Some(Value::Text(text)) = block.property("text").map(|p| &p.value) {
                morph.compilation.locals.insert(style_id.clone(), text.clone());
            }
        }
        _ => {}
    }

    if block.capabilities.is_capture {
        morph.saw_capture = true;
    }
}

pub(super) fn exit(morph: &mut Morph<'_>, block: &Block) {
    let fragment = match morph.open_tags.pop() {
        Some(true) => format!("</{}>", block.name),
        _ => "/>".to_string(),
    };
    morph.compilation.render.push(fragment);
}
