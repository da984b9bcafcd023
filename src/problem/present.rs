use crate::formatting::{format_mapping, format_part, format_specification, render, Render};
use crate::language::*;
use std::collections::BTreeMap;

/// Trait for types that can present themselves via a renderer
pub trait Present {
    fn present(&self, renderer: &dyn Render) -> String;
}

impl Present for Part {
    fn present(&self, renderer: &dyn Render) -> String {
        render(renderer, format_part(self))
    }
}

impl Present for DrsSpecification {
    fn present(&self, renderer: &dyn Render) -> String {
        render(renderer, format_specification(self))
    }
}

impl Present for BTreeMap<String, String> {
    fn present(&self, renderer: &dyn Render) -> String {
        render(renderer, format_mapping(self))
    }
}
