//! Laying out specifications and mappings as styled fragments

use std::collections::BTreeMap;

use crate::formatting::*;
use crate::language::*;

/// Accumulates fragments; see [`render`] for the second pass.
struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        // adjacent fragments of the same kind are merged
        if let Some((last, text)) = self
            .fragments
            .last_mut()
        {
            if *last == syntax {
                text.push_str(content);
                return;
            }
        }
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_part(&mut self, part: &Part) {
        match part {
            Part::Constant { value } => self.append(Syntax::Constant, value),
            Part::Collection {
                collection_id,
                is_required: true,
            } => {
                self.append(Syntax::Punctuation, "[");
                self.append(Syntax::Collection, collection_id);
                self.append(Syntax::Punctuation, "]");
            }
            Part::Collection {
                collection_id,
                is_required: false,
            } => {
                self.append(Syntax::Punctuation, "[");
                self.append(Syntax::Optional, collection_id);
                self.append(Syntax::Punctuation, "?]");
            }
        }
    }

    fn append_specification(&mut self, specs: &DrsSpecification) {
        for (i, part) in specs
            .parts
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Separator, &specs.separator);
            }
            self.append_part(part);
        }

        if let Ok(extension) = specs.full_extension() {
            self.append(Syntax::Extension, &extension);
        }
    }

    fn append_mapping(&mut self, mapping: &BTreeMap<String, String>) {
        for (i, (collection_id, token)) in mapping
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Punctuation, ", ");
            }
            self.append(Syntax::Collection, collection_id);
            self.append(Syntax::Punctuation, " = ");
            self.append(Syntax::Token, token);
        }
    }
}

/// A part as it appears in a layout: constants verbatim, required
/// collections as `[id]`, optional ones as `[id?]`.
pub fn format_part(part: &Part) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.append_part(part);
    output.fragments
}

/// The layout of a specification, for example
/// `[variable_id]_[table_id]_[time_range?].nc`.
pub fn format_specification(specs: &DrsSpecification) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.append_specification(specs);
    output.fragments
}

pub fn format_mapping(mapping: &BTreeMap<String, String>) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.append_mapping(mapping);
    output.fragments
}
