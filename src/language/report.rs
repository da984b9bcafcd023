//! Reports returned by the validator and the generator

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::language::{DrsKind, Issue};

/// What the caller handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Given {
    Mapping(BTreeMap<String, String>),
    Words(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub project_id: String,
    pub kind: DrsKind,
    pub expression: String,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_id: String,
    pub kind: DrsKind,
    pub given: Given,
    /// The collection to token mapping the expression was assembled from;
    /// for a bag of words, the one inferred by conflict resolution.
    pub mapping_used: BTreeMap<String, String>,
    pub generated_expression: String,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl GenerationReport {
    /// Stands in for a required collection that was given no token.
    pub const MISSING_TAG: &'static str = "[MISSING]";

    /// Stands in for a token that is not a term of its collection.
    pub const INVALID_TAG: &'static str = "[INVALID]";
}

macro_rules! report_accessors {
    ($report:ty) => {
        impl $report {
            pub fn error_count(&self) -> usize {
                self.errors
                    .len()
            }

            pub fn warning_count(&self) -> usize {
                self.warnings
                    .len()
            }

            /// Warnings do not count against the expression.
            pub fn validated(&self) -> bool {
                self.errors
                    .is_empty()
            }

            /// Same as the number of errors.
            pub fn len(&self) -> usize {
                self.error_count()
            }

            pub fn is_empty(&self) -> bool {
                self.validated()
            }

            /// Treat warnings as errors.
            pub(crate) fn promote_warnings(&mut self) {
                let warnings = std::mem::take(&mut self.warnings);
                self.errors
                    .extend(warnings);
            }
        }
    };
}

report_accessors!(ValidationReport);
report_accessors!(GenerationReport);

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' has {} error(s) and {} warning(s)",
            self.expression,
            self.error_count(),
            self.warning_count()
        )
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' has {} error(s) and {} warning(s)",
            self.generated_expression,
            self.error_count(),
            self.warning_count()
        )
    }
}

// Hand written so that the derived counts appear alongside the issues.

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 8)?;
        state.serialize_field("project_id", &self.project_id)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("expression", &self.expression)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("nb_errors", &self.error_count())?;
        state.serialize_field("nb_warnings", &self.warning_count())?;
        state.serialize_field("validated", &self.validated())?;
        state.end()
    }
}

impl Serialize for GenerationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GenerationReport", 10)?;
        state.serialize_field("project_id", &self.project_id)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("given_mapping_or_bag_of_words", &self.given)?;
        state.serialize_field("mapping_used", &self.mapping_used)?;
        state.serialize_field("generated_drs_expression", &self.generated_expression)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("nb_errors", &self.error_count())?;
        state.serialize_field("nb_warnings", &self.warning_count())?;
        state.serialize_field("validated", &self.validated())?;
        state.end()
    }
}
