use crate::formatting::{Render, Syntax};
use crate::language::*;
use crate::problem::Present;

fn collection(collection_id: &str) -> Part {
    Part::Collection {
        collection_id: collection_id.to_string(),
        is_required: true,
    }
}

/// Generate problem and detail messages for an issue found in an expression
pub fn describe(issue: &Issue, renderer: &dyn Render) -> (String, String) {
    match issue {
        Issue::Space => (
            "Surrounding white space".to_string(),
            r#"
The expression starts or ends with white space. It was ignored, but most tools
will consider it part of the first or last token.
            "#
            .trim_ascii()
            .to_string(),
        ),
        Issue::Unparsable { expected_kind } => (
            format!("Unable to parse expression as a {}", expected_kind),
            format!(
                r#"
Splitting the expression on the {} separator gave fewer than two tokens.
Check that the expression really is a {}, and that its parts are separated
as the project specifies.
                "#,
                expected_kind, expected_kind
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::ExtraSeparator { column } => (
            format!("Extra separator at column {}", column),
            r#"
Separators must sit between two tokens. A directory may tolerate a doubled
separator, but nothing may start with one.
            "#
            .trim_ascii()
            .to_string(),
        ),
        Issue::ExtraChar { column } => (
            format!("Extra characters at column {}", column),
            "The expression carries on past its last token.".to_string(),
        ),
        Issue::BlankToken { column } => (
            format!("Blank token at column {}", column),
            "A token made only of white space is never valid.".to_string(),
        ),
        Issue::FileNameExtension { expected_extension } => (
            "Missing or wrong file name extension".to_string(),
            format!(
                "File names of this project must end with {}.",
                renderer.style(Syntax::Extension, expected_extension)
            ),
        ),
        Issue::InvalidToken {
            token,
            position,
            collection_id_or_constant_value,
        } => (
            format!("Invalid token at position {}", position),
            format!(
                "The token {} is not compliant with {}.",
                renderer.style(Syntax::Token, token),
                renderer.style(Syntax::Collection, collection_id_or_constant_value)
            ),
        ),
        Issue::ExtraToken {
            token,
            position,
            collection_id,
        } => {
            let details = match collection_id {
                Some(collection_id) => format!(
                    r#"
The token {} was left over once every part had been considered. It may have
been meant for the optional collection {}, which did not accept it.
                    "#,
                    renderer.style(Syntax::Token, token),
                    collection(collection_id).present(renderer)
                ),
                None => format!(
                    "The token {} was left over once every part had been considered.",
                    renderer.style(Syntax::Token, token)
                ),
            };
            (
                format!("Extra token at position {}", position),
                details
                    .trim_ascii()
                    .to_string(),
            )
        }
        Issue::MissingToken {
            collection_id,
            position,
        } => (
            format!("Missing token at position {}", position),
            format!(
                "Nothing was given for {}.",
                collection(collection_id).present(renderer)
            ),
        ),
        Issue::TooManyWordsCollection {
            collection_id,
            words,
        } => (
            "Collection with more than one word".to_string(),
            format!(
                r#"
The words {} all belong to {}, and there is no way to tell which one was
meant. Give fewer words, or use a mapping instead.
                "#,
                styled_words(words, renderer),
                collection(collection_id).present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::ConflictingCollections {
            collection_ids,
            words,
        } => (
            "Collections competing for the same words".to_string(),
            format!(
                r#"
The collections {} all accept exactly the words {}, so none of them could be
given a token.
                "#,
                collection_ids
                    .iter()
                    .map(|id| collection(id).present(renderer))
                    .collect::<Vec<_>>()
                    .join(", "),
                styled_words(words, renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::AssignedWord {
            collection_id,
            word,
        } => (
            format!("Assigned {} to {}", word, collection_id),
            format!(
                r#"
The word {} could belong to more than one collection; it was given to {}
because no other word could be.
                "#,
                renderer.style(Syntax::Token, word),
                collection(collection_id).present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}

fn styled_words(words: &[String], renderer: &dyn Render) -> String {
    words
        .iter()
        .map(|word| renderer.style(Syntax::Token, word))
        .collect::<Vec<_>>()
        .join(", ")
}
