//! Root `index.ts` maintenance.
//!
//! The root index is merged, never rewritten: whatever the file already
//! contains is kept verbatim, and exports for newly generated models are
//! prepended. Lines for models that disappeared from the schema stay.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::collab::Formatter;

/// `export * from './<model>'`
pub fn export_line(model: &str) -> String {
    format!("export * from './{}'", model)
}

/// Append-only set of model exports on top of an existing index file.
#[derive(Debug, Clone, Default)]
pub struct RootIndex {
    existing: String,
    /// Models already exported by `existing`.
    present: HashSet<String>,
    /// Models added during this run, in insertion order.
    added: IndexSet<String>,
}

impl RootIndex {
    pub fn parse(existing: &str) -> Self {
        let present = existing.lines().filter_map(exported_module).collect();
        Self {
            existing: existing.to_string(),
            present,
            added: IndexSet::new(),
        }
    }

    /// Record an export for `model`. Returns false if it is already exported.
    pub fn insert(&mut self, model: &str) -> bool {
        if self.present.contains(model) {
            return false;
        }
        self.added.insert(model.to_string())
    }

    /// New export lines, latest first, followed by the original content.
    /// Only the new lines go through `formatter`.
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        let mut added = String::new();
        for model in self.added.iter().rev() {
            added.push_str(&export_line(model));
            added.push('\n');
        }
        let mut out = formatter.format(&added);
        out.push_str(&self.existing);
        out
    }
}

/// Module name of a `export * from './X'` line, either quote style,
/// optional trailing semicolon and `//` comment.
fn exported_module(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("export * from ")?;
    let rest = match rest.find("//") {
        Some(pos) => rest[..pos].trim_end(),
        None => rest,
    };
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = rest.strip_prefix(quote)?.strip_suffix(quote)?;
    let module = inner.strip_prefix("./")?;
    if module.is_empty() || module.contains('/') {
        return None;
    }
    Some(module.to_string())
}
