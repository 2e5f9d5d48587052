use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::NoColor;

use super::{Diagnostic, DiagnosticKind};

/// Diagnostics gathered by one parse or compile call, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::trace!("diagnostic at {}: {}", diagnostic.position, diagnostic.message);
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, iter: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.0.iter().filter(|d| d.kind == kind).collect()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    /// Plain-text report of every diagnostic against one source file.
    pub fn render(&self, name: &str, source: &str) -> String {
        let mut files = SimpleFiles::new();
        let file_id = files.add(name.to_string(), source.to_string());
        let config = term::Config::default();
        let mut writer = NoColor::new(Vec::new());

        for diagnostic in &self.0 {
            let codespan = Diagnostic {
                file_id,
                ..diagnostic.clone()
            }
            .to_codespan();
            // A span past the end of `source` only loses that one entry.
            let _ = term::emit_to_write_style(&mut writer, &config, &files, &codespan);
        }

        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
