use serde::Serialize;
use views::{Diagnostic, DiagnosticKind, Diagnostics, Parsed, View};

use crate::accumulator::Compilation;
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::visitor::Morph;
use crate::walk::walk;

/// Names a view can't take without clashing with the generated code.
pub const RESERVED_NAMES: &[&str] = &[
    "Animated",
    "AutoSizer",
    "Column",
    "Component",
    "Fragment",
    "Horizontal",
    "Image",
    "List",
    "Proxy",
    "React",
    "ScrollView",
    "StyleSheet",
    "Svg",
    "Table",
    "Text",
    "TextInput",
    "Vertical",
    "View",
];

/// A compiled view, ready for a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compiled {
    pub compilation: Compilation,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

impl Compiled {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.compilation)
    }
}

/// `name1` when `name` is reserved.
pub fn final_name(name: &str) -> String {
    if RESERVED_NAMES.contains(&name) {
        format!("{}1", name)
    } else {
        name.to_string()
    }
}

/// Compile the first view of `parsed` under `name`.
pub fn compile(
    parsed: &Parsed,
    name: &str,
    options: &CompileOptions,
) -> Result<Compiled, CompileError> {
    let view = parsed.main_view().ok_or(CompileError::NoView)?;
    Ok(compile_view(view, name, options, parsed.source_id))
}

pub fn compile_view(view: &View, name: &str, options: &CompileOptions, file_id: usize) -> Compiled {
    log::debug!("compiling view {} ({:?})", name, options.target);

    let final_name = final_name(name);
    let mut renamed = Diagnostics::new();
    if final_name != name {
        let root = &view.root;
        renamed.push(
            Diagnostic::new(
                DiagnosticKind::ReservedName,
                format!("`{}` is a reserved name, it was renamed to `{}`", name, final_name),
                root.span.clone(),
                root.loc.start,
                file_id,
            )
            .with_note("give the view another name"),
        );
    }

    let compilation = Compilation::new(&final_name, view.fonts.clone(), view.slots.clone());
    let mut morph = Morph::new(compilation, options, file_id);
    walk(&view.root, &mut morph);
    let (compilation, walked) = morph.finish();

    renamed.extend(walked);
    log::debug!(
        "compiled view {} with {} diagnostic(s)",
        final_name,
        renamed.len()
    );

    Compiled {
        compilation,
        diagnostics: renamed,
    }
}
