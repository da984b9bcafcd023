//! Problems found while tokenizing, validating, or generating expressions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::DrsKind;

/// Which stage of the engine raises a given issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Compliance,
    Generation,
}

/// Every problem the engine can report. Issues are plain values; whether
/// one counts as an error or a warning is decided by the report it is
/// placed in, not by the issue itself.
///
/// `InvalidToken` and `MissingToken` are raised both when validating and
/// when generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class_name")]
pub enum Issue {
    /// White space at the start or end of the expression.
    Space,

    /// Fewer than two tokens after splitting on the separator.
    Unparsable { expected_kind: DrsKind },

    ExtraSeparator { column: usize },

    /// Trailing characters (separators mixed with blanks) after the last
    /// real token.
    ExtraChar { column: usize },

    /// A token made only of white space.
    BlankToken { column: usize },

    #[serde(rename = "FileNameExtensionIssue")]
    FileNameExtension { expected_extension: String },

    InvalidToken {
        token: String,
        position: usize,
        collection_id_or_constant_value: String,
    },

    /// A token left over once every part has been considered. When an
    /// optional collection was skipped because it rejected this token, that
    /// collection is named.
    ExtraToken {
        token: String,
        position: usize,
        collection_id: Option<String>,
    },

    MissingToken {
        collection_id: String,
        position: usize,
    },

    TooManyWordsCollection {
        collection_id: String,
        words: Vec<String>,
    },

    ConflictingCollections {
        collection_ids: Vec<String>,
        words: Vec<String>,
    },

    /// The generator decided which collection a word belongs to.
    AssignedWord { collection_id: String, word: String },
}

impl Issue {
    /// The one-based column of the faulty characters, for issues raised
    /// while tokenizing.
    pub fn column(&self) -> Option<usize> {
        match self {
            Issue::ExtraSeparator { column }
            | Issue::ExtraChar { column }
            | Issue::BlankToken { column } => Some(*column),
            _ => None,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Issue::Space
            | Issue::Unparsable { .. }
            | Issue::ExtraSeparator { .. }
            | Issue::ExtraChar { .. }
            | Issue::BlankToken { .. } => Stage::Parsing,
            Issue::FileNameExtension { .. }
            | Issue::InvalidToken { .. }
            | Issue::ExtraToken { .. }
            | Issue::MissingToken { .. } => Stage::Compliance,
            Issue::TooManyWordsCollection { .. }
            | Issue::ConflictingCollections { .. }
            | Issue::AssignedWord { .. } => Stage::Generation,
        }
    }

    /// The name used for this issue when serialized.
    pub fn class_name(&self) -> &'static str {
        match self {
            Issue::Space => "Space",
            Issue::Unparsable { .. } => "Unparsable",
            Issue::ExtraSeparator { .. } => "ExtraSeparator",
            Issue::ExtraChar { .. } => "ExtraChar",
            Issue::BlankToken { .. } => "BlankToken",
            Issue::FileNameExtension { .. } => "FileNameExtensionIssue",
            Issue::InvalidToken { .. } => "InvalidToken",
            Issue::ExtraToken { .. } => "ExtraToken",
            Issue::MissingToken { .. } => "MissingToken",
            Issue::TooManyWordsCollection { .. } => "TooManyWordsCollection",
            Issue::ConflictingCollections { .. } => "ConflictingCollections",
            Issue::AssignedWord { .. } => "AssignedWord",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Space => write!(f, "expression is surrounded by white space[s]"),
            Issue::Unparsable { expected_kind } => {
                write!(f, "unable to parse this expression as a {}", expected_kind)
            }
            Issue::ExtraSeparator { column } => {
                write!(f, "extra separator(s) at column {}", column)
            }
            Issue::ExtraChar { column } => write!(f, "extra character(s) at column {}", column),
            Issue::BlankToken { column } => write!(f, "blank token at column {}", column),
            Issue::FileNameExtension { expected_extension } => write!(
                f,
                "filename extension missing or not compliant with '{}'",
                expected_extension
            ),
            Issue::InvalidToken {
                token,
                position,
                collection_id_or_constant_value,
            } => write!(
                f,
                "token '{}' not compliant with {} at position {}",
                token, collection_id_or_constant_value, position
            ),
            Issue::ExtraToken {
                token,
                position,
                collection_id,
            } => {
                write!(f, "extra token {}", token)?;
                if let Some(collection_id) = collection_id {
                    write!(f, " invalidated by the optional collection {}", collection_id)?;
                }
                write!(f, " at position {}", position)
            }
            Issue::MissingToken {
                collection_id,
                position,
            } => write!(
                f,
                "missing token for {} at position {}",
                collection_id, position
            ),
            Issue::TooManyWordsCollection {
                collection_id,
                words,
            } => write!(
                f,
                "collection {} has more than one word ({})",
                collection_id,
                words.join(", ")
            ),
            Issue::ConflictingCollections {
                collection_ids,
                words,
            } => write!(
                f,
                "collections {} are competing for the same word(s) {}",
                collection_ids.join(", "),
                words.join(", ")
            ),
            Issue::AssignedWord {
                collection_id,
                word,
            } => write!(f, "assign word {} for collection {}", word, collection_id),
        }
    }
}

/// Order issues by column, those without a column first. The sort is
/// stable so issues at the same column keep the order they were found in.
pub(crate) fn sort_by_column(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| {
        issue
            .column()
            .unwrap_or(0)
    });
}
