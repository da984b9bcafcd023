use crate::formatting::{Render, Syntax};
use crate::language::*;
use crate::problem::{describe, Severity};

/// Format an issue with full details. Issues found while tokenizing point at
/// the offending column of the expression.
pub fn full_issue(
    issue: &Issue,
    severity: Severity,
    expression: &str,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = describe(issue, renderer);

    let label = severity.present(renderer);
    let bar = renderer.style(Syntax::Punctuation, "|");

    match issue.column() {
        Some(column) => format!(
            r#"
{}: {}

    {}
    {} {}
    {} {}{}

{}
            "#,
            label,
            renderer.style(Syntax::Problem, &problem),
            bar,
            bar,
            expression,
            bar,
            " ".repeat(column.saturating_sub(1)),
            renderer.style(Syntax::Caret, "^"),
            details
        )
        .trim_ascii()
        .to_string(),
        None => format!(
            r#"
{}: {}

{}
            "#,
            label,
            renderer.style(Syntax::Problem, &problem),
            details
        )
        .trim_ascii()
        .to_string(),
    }
}

/// Format an issue with concise single-line output
pub fn concise_issue(issue: &Issue, severity: Severity, renderer: &dyn Render) -> String {
    format!(
        "{}: {}",
        severity.present(renderer),
        renderer.style(Syntax::Problem, &issue.to_string())
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        Severity::Error.present(renderer),
        error
            .filename
            .display(),
        renderer.style(Syntax::Problem, &error.problem)
    )
}

/// Format a problem with the project file itself
pub fn concise_configuration_error(
    error: &ConfigurationError,
    filename: &std::path::Path,
    renderer: &dyn Render,
) -> String {
    format!(
        "{}: {}: {}",
        Severity::Error.present(renderer),
        filename.display(),
        renderer.style(Syntax::Problem, &error.to_string())
    )
}
