use std::collections::BTreeMap;

use tracing::debug;

use crate::generating::{check_collection_words_mapping, resolve_conflicts, CollectionWords};
use crate::language::{
    ConfigurationError, DrsKind, DrsSpecification, GenerationReport, Given, Issue, Part,
    ProjectSpecs, Specifications, VocabularyError,
};
use crate::vocabulary::Vocabulary;

/// Assembles directories, file names, and dataset ids of one project, either
/// from an explicit collection to token mapping or from an unordered bag of
/// words. Like the validator, a generator may be shared between threads.
pub struct DrsGenerator<'a> {
    project_id: String,
    pedantic: bool,
    specs: Specifications<'a>,
    vocabulary: &'a dyn Vocabulary,
}

impl<'a> DrsGenerator<'a> {
    pub fn new(
        project_id: &str,
        project: &'a ProjectSpecs,
        vocabulary: &'a dyn Vocabulary,
    ) -> Result<DrsGenerator<'a>, ConfigurationError> {
        let specs = Specifications::select(project)?;
        Ok(DrsGenerator {
            project_id: project_id.to_string(),
            pedantic: false,
            specs,
            vocabulary,
        })
    }

    /// In pedantic mode every warning is reported as an error.
    pub fn pedantic(mut self, pedantic: bool) -> Self {
        self.pedantic = pedantic;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn generate_directory_from_mapping(
        &self,
        mapping: &BTreeMap<String, String>,
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_mapping(mapping, DrsKind::Directory)
    }

    pub fn generate_file_name_from_mapping(
        &self,
        mapping: &BTreeMap<String, String>,
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_mapping(mapping, DrsKind::FileName)
    }

    pub fn generate_dataset_id_from_mapping(
        &self,
        mapping: &BTreeMap<String, String>,
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_mapping(mapping, DrsKind::DatasetId)
    }

    pub fn generate_directory_from_bag_of_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_bag_of_words(words, DrsKind::Directory)
    }

    pub fn generate_file_name_from_bag_of_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_bag_of_words(words, DrsKind::FileName)
    }

    pub fn generate_dataset_id_from_bag_of_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Result<GenerationReport, VocabularyError> {
        self.generate_from_bag_of_words(words, DrsKind::DatasetId)
    }

    /// Every token given is checked against its collection; tokens that
    /// fail are replaced by [`GenerationReport::INVALID_TAG`]. Entries of the
    /// mapping naming no collection of the specification are ignored.
    pub fn generate_from_mapping(
        &self,
        mapping: &BTreeMap<String, String>,
        kind: DrsKind,
    ) -> Result<GenerationReport, VocabularyError> {
        let specs = self
            .specs
            .get(kind);
        let mut report = self.assemble(mapping, specs, true, Given::Mapping(mapping.clone()))?;

        if self.pedantic {
            report.promote_warnings();
        }

        debug!("{}", report);
        Ok(report)
    }

    /// Work out which collection each word belongs to, then assemble the
    /// expression from the mapping that results. Words are not checked a
    /// second time once assigned.
    pub fn generate_from_bag_of_words<S: AsRef<str>>(
        &self,
        words: &[S],
        kind: DrsKind,
    ) -> Result<GenerationReport, VocabularyError> {
        let specs = self
            .specs
            .get(kind);

        let words: Vec<&str> = words
            .iter()
            .map(|word| word.as_ref())
            .collect();

        let mut candidates = CollectionWords::new();
        for &word in &words {
            let collections = self
                .vocabulary
                .collections_matching(&self.project_id, word)?;
            if collections.is_empty() {
                debug!("Word {} matches no collection", word);
            }
            for collection_id in collections {
                candidates.insert(&collection_id, word);
            }
        }

        let (candidates, assignments) = resolve_conflicts(candidates);
        let (mapping, errors) = check_collection_words_mapping(candidates);

        let given = Given::Words(
            words
                .iter()
                .map(|word| word.to_string())
                .collect(),
        );

        let mut report = self.assemble(&mapping, specs, false, given)?;

        let mut all_errors = errors;
        all_errors.append(&mut report.errors);
        report.errors = all_errors;

        let mut all_warnings = assignments;
        all_warnings.append(&mut report.warnings);
        report.warnings = all_warnings;

        if self.pedantic {
            report.promote_warnings();
        }

        debug!("{}", report);
        Ok(report)
    }

    fn assemble(
        &self,
        mapping: &BTreeMap<String, String>,
        specs: &DrsSpecification,
        has_to_validate: bool,
        given: Given,
    ) -> Result<GenerationReport, VocabularyError> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut slots: Vec<&str> = Vec::with_capacity(
            specs
                .parts
                .len(),
        );

        for (index, part) in specs
            .parts
            .iter()
            .enumerate()
        {
            let position = index + 1;
            match part {
                Part::Constant { value } => slots.push(value),
                Part::Collection {
                    collection_id,
                    is_required,
                } => match mapping.get(collection_id) {
                    Some(token) => {
                        if has_to_validate
                            && !self
                                .vocabulary
                                .term_exists_in_collection(
                                    &self.project_id,
                                    collection_id,
                                    token,
                                )?
                        {
                            debug!("Token {} is not a term of {}", token, collection_id);
                            errors.push(Issue::InvalidToken {
                                token: token.clone(),
                                position,
                                collection_id_or_constant_value: collection_id.clone(),
                            });
                            slots.push(GenerationReport::INVALID_TAG);
                        } else {
                            slots.push(token);
                        }
                    }
                    None => {
                        let issue = Issue::MissingToken {
                            collection_id: collection_id.clone(),
                            position,
                        };
                        if *is_required {
                            errors.push(issue);
                            slots.push(GenerationReport::MISSING_TAG);
                        } else {
                            warnings.push(issue);
                        }
                    }
                },
            }
        }

        let mut generated_expression = slots.join(specs.separator.as_str());
        if specs.kind == DrsKind::FileName {
            // checked when the specifications were selected
            let extension = specs
                .full_extension()
                .unwrap_or_default();
            generated_expression.push_str(&extension);
        }

        Ok(GenerationReport {
            project_id: self
                .project_id
                .clone(),
            kind: specs.kind,
            given,
            mapping_used: mapping.clone(),
            generated_expression,
            errors,
            warnings,
        })
    }
}
