//! Loading project files, and splitting expressions into tokens

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::language::{ConfigurationError, LoadingError, ProjectSpecs, Specifications};
use crate::vocabulary::{CollectionSpec, MemoryVocabulary};

pub mod tokenizer;

pub use tokenizer::{tokenize, Tokenized};

/// A project as described by its project file: the DRS specifications and
/// the vocabulary its collections draw from.
#[derive(Debug, Clone)]
pub struct Project {
    pub specs: ProjectSpecs,
    pub vocabulary: MemoryVocabulary,
}

#[derive(Deserialize)]
struct ProjectFile {
    #[serde(flatten)]
    specs: ProjectSpecs,
    #[serde(default)]
    collections: Vec<CollectionSpec>,
}

/// Read a file and return an owned String. A filename of "-" reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse the content of a project file. YAML is assumed when the file name
/// says so, JSON otherwise. The specifications are checked before the
/// project is returned, so a `Project` always has one usable
/// specification per kind.
pub fn parse(filename: &Path, content: &str) -> Result<Project, ConfigurationError> {
    let yaml = matches!(
        filename
            .extension()
            .and_then(|extension| extension.to_str()),
        Some("yaml" | "yml")
    );

    let file: ProjectFile = if yaml {
        serde_yaml::from_str(content)
            .map_err(|error| ConfigurationError::Malformed(error.to_string()))?
    } else {
        serde_json::from_str(content)
            .map_err(|error| ConfigurationError::Malformed(error.to_string()))?
    };

    Specifications::select(&file.specs)?;

    let vocabulary = MemoryVocabulary::from_specs(&file.specs.project_id, file.collections)?;

    debug!(
        "Loaded project {} with {} specification{}",
        file.specs
            .project_id,
        file.specs
            .drs_specs
            .len(),
        if file
            .specs
            .drs_specs
            .len()
            == 1
        {
            ""
        } else {
            "s"
        }
    );

    Ok(Project {
        specs: file.specs,
        vocabulary,
    })
}
