//! Output of reports for the drs command line application

use serde::Serialize;
use thiserror::Error;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::formatting::{Render, Syntax};
use crate::language::{DrsSpecification, GenerationReport, Issue, ValidationReport};
use crate::problem::{concise_issue, full_issue, Present, Severity};

static VALIDATED: &str = "{kind} {expression}: {verdict}, {errors} error(s) and {warnings} warning(s)";

static GENERATED: &str =
    "{kind} {expression}: {verdict}, {errors} error(s) and {warnings} warning(s)\n{given} -> {mapping}";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unable to render summary: {0}")]
    Template(#[from] tinytemplate::error::Error),

    #[error("unable to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Context {
    kind: String,
    expression: String,
    verdict: String,
    errors: usize,
    warnings: usize,
    given: String,
    mapping: String,
}

fn summarize(template: &'static str, context: &Context) -> Result<String, OutputError> {
    let mut tt = TinyTemplate::new();
    // values are styled before they reach the template
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", template)?;
    Ok(tt.render("summary", context)?)
}

fn verdict(validated: bool, renderer: &dyn Render) -> String {
    if validated {
        renderer.style(Syntax::Valid, "valid")
    } else {
        renderer.style(Syntax::Invalid, "invalid")
    }
}

fn issues(
    output: &mut String,
    errors: &[Issue],
    warnings: &[Issue],
    expression: &str,
    verbose: bool,
    renderer: &dyn Render,
) {
    let all = errors
        .iter()
        .map(|issue| (issue, Severity::Error))
        .chain(
            warnings
                .iter()
                .map(|issue| (issue, Severity::Warning)),
        );

    for (issue, severity) in all {
        output.push('\n');
        if verbose {
            output.push('\n');
            output.push_str(&full_issue(issue, severity, expression, renderer));
            output.push('\n');
        } else {
            output.push_str("  ");
            output.push_str(&concise_issue(issue, severity, renderer));
        }
    }
}

/// A summary line followed by the issues of the report. When verbose, the
/// layout the expression was checked against is shown as well.
pub fn validation_text(
    report: &ValidationReport,
    specs: &DrsSpecification,
    verbose: bool,
    renderer: &dyn Render,
) -> Result<String, OutputError> {
    let context = Context {
        kind: report
            .kind
            .to_string(),
        expression: renderer.style(Syntax::Token, &report.expression),
        verdict: verdict(report.validated(), renderer),
        errors: report.error_count(),
        warnings: report.warning_count(),
        given: String::new(),
        mapping: String::new(),
    };

    let mut output = summarize(VALIDATED, &context)?;

    if verbose && !report.validated() {
        output.push_str("\n  expected ");
        output.push_str(&specs.present(renderer));
    }

    issues(
        &mut output,
        &report.errors,
        &report.warnings,
        &report.expression,
        verbose,
        renderer,
    );

    debug!("Rendered report for {}", report.expression);
    Ok(output)
}

pub fn generation_text(
    report: &GenerationReport,
    verbose: bool,
    renderer: &dyn Render,
) -> Result<String, OutputError> {
    let given = serde_json::to_string(&report.given)?;

    let context = Context {
        kind: report
            .kind
            .to_string(),
        expression: renderer.style(Syntax::Token, &report.generated_expression),
        verdict: verdict(report.validated(), renderer),
        errors: report.error_count(),
        warnings: report.warning_count(),
        given,
        mapping: report
            .mapping_used
            .present(renderer),
    };

    let mut output = summarize(GENERATED, &context)?;

    issues(
        &mut output,
        &report.errors,
        &report.warnings,
        &report.generated_expression,
        verbose,
        renderer,
    );

    Ok(output)
}

/// All the reports as one JSON array.
pub fn json<T: Serialize>(reports: &[T]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
