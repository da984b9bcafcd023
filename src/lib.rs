//! Validate and generate identifiers following a project's Data Reference
//! Syntax: the rules by which directories, file names, and dataset ids are
//! assembled from controlled vocabulary.

pub mod formatting;
pub mod generating;
pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
pub mod regex;
pub mod validating;
pub mod vocabulary;
