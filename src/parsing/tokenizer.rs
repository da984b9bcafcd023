//! Splitting a DRS expression into tokens, with positional recovery

use tracing::debug;

use crate::language::{sort_by_column, DrsKind, Issue};

/// The outcome of tokenizing an expression. `tokens` is `None` when the
/// expression could not be split at all, in which case `errors` holds the
/// reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'i> {
    pub tokens: Option<Vec<&'i str>>,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

/// Split `expression` on `separator`, recording every typographical
/// problem found along the way and removing the tokens responsible for
/// them. Columns in the resulting issues are one-based and refer to the
/// expression as given, before any white space was stripped.
///
/// When `pedantic` is set, problems that would be tolerated as warnings
/// are recorded as errors instead.
pub fn tokenize<'i>(
    expression: &'i str,
    separator: &str,
    kind: DrsKind,
    pedantic: bool,
) -> Tokenized<'i> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Surrounding white space, stripped so the rest of the scan sees only
    // the expression proper. Stripping from the left shifts every column.
    let mut offset = 0;
    let mut expression = expression;

    if expression.starts_with(char::is_whitespace) || expression.ends_with(char::is_whitespace) {
        if pedantic {
            errors.push(Issue::Space);
        } else {
            warnings.push(Issue::Space);
        }

        let trimmed = expression.trim_start();
        offset = width(expression) - width(trimmed);
        expression = trimmed.trim_end();
    }

    let mut tokens: Vec<&'i str> = expression
        .split(separator)
        .collect();

    if tokens.len() < 2 {
        debug!("Unable to split '{}' on '{}'", expression, separator);
        errors.push(Issue::Unparsable {
            expected_kind: kind,
        });
        return Tokenized {
            tokens: None,
            errors,
            warnings,
        };
    }

    // The cursor holds the column at which the separator following the
    // current token starts; past the end for the last token.
    let step = width(separator);
    let initial = width(expression) + 1;
    let mut cursor = initial;

    // Trailing empty or blank tokens are reported once, as a whole.
    let mut has_blank = false;
    while let Some(token) = tokens.last() {
        let blank = is_blank(token);
        if blank || token.is_empty() {
            has_blank = has_blank || blank;
            cursor = cursor.saturating_sub(width(token) + step);
            tokens.pop();
        } else {
            break;
        }
    }

    if cursor != initial {
        // an expression of nothing but separators starts at the first column
        let column = cursor.max(1) + offset;
        if kind == DrsKind::Directory && !has_blank {
            warnings.push(Issue::ExtraSeparator { column });
        } else {
            errors.push(Issue::ExtraChar { column });
        }
    }

    // Then, from the end, empty tokens (doubled separators) and blank ones.
    let mut kept = Vec::with_capacity(tokens.len());
    for (index, token) in tokens
        .iter()
        .enumerate()
        .rev()
    {
        let length = width(token);

        if token.is_empty() {
            let issue = Issue::ExtraSeparator {
                column: cursor + offset,
            };
            // a directory may tolerate a doubled separator, but never a
            // leading one
            if kind != DrsKind::Directory || pedantic || index == 0 {
                errors.push(issue);
            } else {
                warnings.push(issue);
            }
        } else if is_blank(token) {
            errors.push(Issue::BlankToken {
                column: cursor + offset - length,
            });
        } else {
            kept.push(*token);
        }

        cursor = cursor.saturating_sub(length + step);
    }
    kept.reverse();

    sort_by_column(&mut errors);
    sort_by_column(&mut warnings);

    Tokenized {
        tokens: Some(kept),
        errors,
        warnings,
    }
}

// Columns count characters, not bytes.
fn width(text: &str) -> usize {
    text.chars()
        .count()
}

fn is_blank(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(char::is_whitespace)
}
