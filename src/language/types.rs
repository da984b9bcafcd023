//! Types describing a project's Data Reference Syntax specifications

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::language::ConfigurationError;

/// Property key of a file name specification holding the separator placed
/// before the extension.
pub const EXTENSION_SEPARATOR_KEY: &str = "extension_separator";

/// Property key of a file name specification holding the extension.
pub const EXTENSION_KEY: &str = "extension";

/// The three kinds of expression a project names with its DRS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrsKind {
    Directory,
    FileName,
    DatasetId,
}

impl DrsKind {
    pub const ALL: [DrsKind; 3] = [DrsKind::Directory, DrsKind::FileName, DrsKind::DatasetId];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrsKind::Directory => "directory",
            DrsKind::FileName => "file_name",
            DrsKind::DatasetId => "dataset_id",
        }
    }
}

impl fmt::Display for DrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrsKind {
    type Err = String;

    // the shorter spellings are the ones people type at the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory" => Ok(DrsKind::Directory),
            "file_name" | "filename" => Ok(DrsKind::FileName),
            "dataset_id" | "dataset" => Ok(DrsKind::DatasetId),
            _ => Err(format!("unknown DRS kind '{}'", s)),
        }
    }
}

/// One slot of a specification: either a literal or an instance of a
/// collection of controlled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Part {
    Constant {
        value: String,
    },
    Collection {
        collection_id: String,
        is_required: bool,
    },
}

impl Part {
    /// Constants are always required.
    pub fn is_required(&self) -> bool {
        match self {
            Part::Constant { .. } => true,
            Part::Collection { is_required, .. } => *is_required,
        }
    }

    /// The collection id, or the literal value of a constant. This is what
    /// issues name when they refer to a part.
    pub fn label(&self) -> &str {
        match self {
            Part::Constant { value } => value,
            Part::Collection { collection_id, .. } => collection_id,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrsSpecification {
    #[serde(rename = "type")]
    pub kind: DrsKind,
    pub separator: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub parts: Vec<Part>,
}

impl DrsSpecification {
    /// The suffix every file name must carry, for example ".nc".
    pub fn full_extension(&self) -> Result<String, ConfigurationError> {
        let separator = self.property(EXTENSION_SEPARATOR_KEY)?;
        let extension = self.property(EXTENSION_KEY)?;
        Ok(format!("{}{}", separator, extension))
    }

    fn property(&self, key: &'static str) -> Result<&str, ConfigurationError> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or(ConfigurationError::MissingProperty {
                kind: self.kind,
                key,
            })
    }
}

/// The DRS specifications of one project, as found in its project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpecs {
    pub project_id: String,
    #[serde(default)]
    pub description: String,
    pub drs_specs: Vec<DrsSpecification>,
}

impl ProjectSpecs {
    pub fn specification(&self, kind: DrsKind) -> Option<&DrsSpecification> {
        self.drs_specs
            .iter()
            .find(|specs| specs.kind == kind)
    }
}

/// One specification per kind, checked for consistency. Validators and
/// generators borrow these; the project owns them.
#[derive(Debug, Clone, Copy)]
pub struct Specifications<'i> {
    pub directory: &'i DrsSpecification,
    pub file_name: &'i DrsSpecification,
    pub dataset_id: &'i DrsSpecification,
}

impl<'i> Specifications<'i> {
    pub fn select(project: &'i ProjectSpecs) -> Result<Specifications<'i>, ConfigurationError> {
        let mut found: [Option<&'i DrsSpecification>; 3] = [None, None, None];

        for specs in &project.drs_specs {
            let slot = &mut found[specs.kind as usize];
            if slot.is_some() {
                return Err(ConfigurationError::DuplicateSpecification {
                    project_id: project
                        .project_id
                        .clone(),
                    kind: specs.kind,
                });
            }
            check_specification(specs)?;
            *slot = Some(specs);
        }

        let take = |kind: DrsKind| {
            found[kind as usize].ok_or_else(|| ConfigurationError::MissingSpecification {
                project_id: project
                    .project_id
                    .clone(),
                kind,
            })
        };

        Ok(Specifications {
            directory: take(DrsKind::Directory)?,
            file_name: take(DrsKind::FileName)?,
            dataset_id: take(DrsKind::DatasetId)?,
        })
    }

    pub fn get(&self, kind: DrsKind) -> &'i DrsSpecification {
        match kind {
            DrsKind::Directory => self.directory,
            DrsKind::FileName => self.file_name,
            DrsKind::DatasetId => self.dataset_id,
        }
    }
}

fn check_specification(specs: &DrsSpecification) -> Result<(), ConfigurationError> {
    if specs
        .separator
        .is_empty()
    {
        return Err(ConfigurationError::EmptySeparator { kind: specs.kind });
    }
    if specs
        .parts
        .is_empty()
    {
        return Err(ConfigurationError::NoParts { kind: specs.kind });
    }
    if specs.kind == DrsKind::FileName {
        specs.full_extension()?;
    }
    Ok(())
}
