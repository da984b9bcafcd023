use std::{fmt, path::Path};

use thiserror::Error;

use crate::language::DrsKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Problems with the specifications or vocabulary handed to the engine.
/// These are mistakes in configuration, not in the expressions being
/// checked, and are never reported as issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("project {project_id} has no {kind} specification")]
    MissingSpecification { project_id: String, kind: DrsKind },

    #[error("project {project_id} has more than one {kind} specification")]
    DuplicateSpecification { project_id: String, kind: DrsKind },

    #[error("the {kind} specification has an empty separator")]
    EmptySeparator { kind: DrsKind },

    #[error("the {kind} specification has no parts")]
    NoParts { kind: DrsKind },

    #[error("the {kind} specification lacks the '{key}' property")]
    MissingProperty { kind: DrsKind, key: &'static str },

    #[error("term {term_id} of collection {collection_id} has an invalid pattern: {reason}")]
    InvalidPattern {
        collection_id: String,
        term_id: String,
        reason: String,
    },

    #[error("malformed project file: {0}")]
    Malformed(String),
}

/// Failure of the vocabulary collaborator while answering a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("unknown project '{0}'")]
    UnknownProject(String),

    #[error("vocabulary lookup failed: {0}")]
    Lookup(String),
}
