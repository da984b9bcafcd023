//! Explaining issues to people

use std::fmt;

use crate::formatting::{Render, Syntax};

mod format;
mod messages;
mod present;

// Re-export all public symbols
pub use format::*;
pub use messages::*;
pub use present::*;

/// Whether an issue was reported among the errors or the warnings of its
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn present(&self, renderer: &dyn Render) -> String {
        match self {
            Severity::Error => renderer.style(Syntax::Error, "error"),
            Severity::Warning => renderer.style(Syntax::Warning, "warning"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}
