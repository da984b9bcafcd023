//! Renderers for colourizing expressions, specifications, and issues

use owo_colors::OwoColorize;

use crate::formatting::Syntax;

/// Trait for different rendering backends (the no-op no-markup one, and ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Render content with the specified type/style
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

/// Embellish fragments with ANSI escapes for output to a terminal.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Token => content // #4e9a06 (green) bold
                .color(owo_colors::Rgb(78, 154, 6))
                .bold()
                .to_string(),
            Syntax::Collection => content // #3465a4 (blue) bold
                .color(owo_colors::Rgb(52, 101, 164))
                .bold()
                .to_string(),
            Syntax::Constant => content // #8f5902 (brown) bold
                .color(owo_colors::Rgb(143, 89, 2))
                .bold()
                .to_string(),
            Syntax::Separator => content // #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Extension => content // #ad7fa8 (purple)
                .color(owo_colors::Rgb(173, 127, 168))
                .to_string(),
            Syntax::Optional => content // #729fcf (light blue)
                .color(owo_colors::Rgb(114, 159, 207))
                .to_string(),
            Syntax::Punctuation => content
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Problem => content
                .bold()
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .bold()
                .to_string(),
            Syntax::Warning => content
                .bright_yellow()
                .bold()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .to_string(),
            Syntax::Valid => content
                .bright_green()
                .to_string(),
            Syntax::Invalid => content
                .bright_red()
                .to_string(),
        }
    }
}

/// We do formatting in two passes. First the formatter converts our types
/// into a Vec of "fragments" (Syntax tag, String pairs). Then we apply the
/// specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
