//! Styled output of the engine's types

mod formatter;
mod renderer;
mod syntax;

pub use formatter::*;
pub use renderer::*;
pub use syntax::*;
