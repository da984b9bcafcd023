//! A vocabulary held in memory, typically loaded from a project file

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::{ConfigurationError, VocabularyError};
use crate::vocabulary::Vocabulary;

/// A term as written in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TermSpec {
    Plain {
        #[serde(default)]
        id: Option<String>,
        drs_name: String,
    },
    Pattern {
        id: String,
        pattern: String,
    },
}

/// A collection as written in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSpec {
    pub id: String,
    #[serde(default)]
    pub terms: Vec<TermSpec>,
}

#[derive(Debug, Clone)]
enum Matcher {
    Plain(String),
    Pattern(Regex),
}

#[derive(Debug, Clone)]
pub struct Term {
    pub id: String,
    matcher: Matcher,
}

impl Term {
    pub fn plain(drs_name: &str) -> Term {
        Term {
            id: drs_name.to_lowercase(),
            matcher: Matcher::Plain(drs_name.to_string()),
        }
    }

    /// The pattern has to match the whole token.
    pub fn pattern(id: &str, pattern: &str) -> Result<Term, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Term {
            id: id.to_string(),
            matcher: Matcher::Pattern(regex),
        })
    }

    pub fn accepts(&self, token: &str) -> bool {
        match &self.matcher {
            Matcher::Plain(drs_name) => drs_name == token,
            Matcher::Pattern(regex) => regex.is_match(token),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Collection {
    pub id: String,
    pub terms: Vec<Term>,
}

impl Collection {
    pub fn new(id: &str, terms: Vec<Term>) -> Collection {
        Collection {
            id: id.to_string(),
            terms,
        }
    }

    /// A collection of plain terms, which is most of them.
    pub fn plain(id: &str, drs_names: &[&str]) -> Collection {
        Collection::new(
            id,
            drs_names
                .iter()
                .map(|name| Term::plain(name))
                .collect(),
        )
    }

    pub fn accepts(&self, token: &str) -> bool {
        self.terms
            .iter()
            .any(|term| term.accepts(token))
    }
}

impl TryFrom<CollectionSpec> for Collection {
    type Error = ConfigurationError;

    fn try_from(spec: CollectionSpec) -> Result<Self, Self::Error> {
        let mut terms = Vec::with_capacity(
            spec.terms
                .len(),
        );

        for term in spec.terms {
            let term = match term {
                TermSpec::Plain { id, drs_name } => {
                    let mut term = Term::plain(&drs_name);
                    if let Some(id) = id {
                        term.id = id;
                    }
                    term
                }
                TermSpec::Pattern { id, pattern } => {
                    Term::pattern(&id, &pattern).map_err(|error| {
                        ConfigurationError::InvalidPattern {
                            collection_id: spec
                                .id
                                .clone(),
                            term_id: id.clone(),
                            reason: error.to_string(),
                        }
                    })?
                }
            };
            terms.push(term);
        }

        Ok(Collection { id: spec.id, terms })
    }
}

/// Collections of terms, per project. Collections keep the order they were
/// added in, and that is the order `collections_matching()` answers in.
#[derive(Debug, Clone, Default)]
pub struct MemoryVocabulary {
    projects: BTreeMap<String, Vec<Collection>>,
}

impl MemoryVocabulary {
    pub fn new() -> MemoryVocabulary {
        MemoryVocabulary::default()
    }

    pub fn with_project(mut self, project_id: &str, collections: Vec<Collection>) -> Self {
        self.add_project(project_id, collections);
        self
    }

    pub fn add_project(&mut self, project_id: &str, collections: Vec<Collection>) {
        self.projects
            .insert(project_id.to_string(), collections);
    }

    pub fn from_specs(
        project_id: &str,
        specs: Vec<CollectionSpec>,
    ) -> Result<MemoryVocabulary, ConfigurationError> {
        let collections = specs
            .into_iter()
            .map(Collection::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MemoryVocabulary::new().with_project(project_id, collections))
    }

    fn collections(&self, project_id: &str) -> Result<&[Collection], VocabularyError> {
        self.projects
            .get(project_id)
            .map(Vec::as_slice)
            .ok_or_else(|| VocabularyError::UnknownProject(project_id.to_string()))
    }
}

impl Vocabulary for MemoryVocabulary {
    fn term_exists_in_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        token: &str,
    ) -> Result<bool, VocabularyError> {
        let collection = self
            .collections(project_id)?
            .iter()
            .find(|collection| collection.id == collection_id);

        match collection {
            Some(collection) => Ok(collection.accepts(token)),
            None => {
                debug!("No collection {} in project {}", collection_id, project_id);
                Ok(false)
            }
        }
    }

    fn collections_matching(
        &self,
        project_id: &str,
        token: &str,
    ) -> Result<Vec<String>, VocabularyError> {
        Ok(self
            .collections(project_id)?
            .iter()
            .filter(|collection| collection.accepts(token))
            .map(|collection| {
                collection
                    .id
                    .clone()
            })
            .collect())
    }
}
