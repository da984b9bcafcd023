use tracing::debug;

use crate::language::{
    ConfigurationError, DrsKind, DrsSpecification, Issue, Part, ProjectSpecs, Specifications,
    ValidationReport, VocabularyError,
};
use crate::parsing::tokenize;
use crate::vocabulary::Vocabulary;

/// Validates directories, file names, and dataset ids of one project. A
/// validator holds no mutable state and may be shared between threads.
pub struct DrsValidator<'a> {
    project_id: String,
    pedantic: bool,
    specs: Specifications<'a>,
    vocabulary: &'a dyn Vocabulary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Matched,
    Skipped,
    Invalid,
}

impl<'a> DrsValidator<'a> {
    pub fn new(
        project_id: &str,
        project: &'a ProjectSpecs,
        vocabulary: &'a dyn Vocabulary,
    ) -> Result<DrsValidator<'a>, ConfigurationError> {
        let specs = Specifications::select(project)?;
        Ok(DrsValidator {
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

    pub fn validate_directory(&self, expression: &str) -> Result<ValidationReport, VocabularyError> {
        self.validate(expression, DrsKind::Directory)
    }

    pub fn validate_dataset_id(
        &self,
        expression: &str,
    ) -> Result<ValidationReport, VocabularyError> {
        self.validate(expression, DrsKind::DatasetId)
    }

    /// File names must end with the extension their specification names;
    /// the rest is validated like any other expression.
    pub fn validate_file_name(&self, expression: &str) -> Result<ValidationReport, VocabularyError> {
        self.validate(expression, DrsKind::FileName)
    }

    pub fn validate(
        &self,
        expression: &str,
        kind: DrsKind,
    ) -> Result<ValidationReport, VocabularyError> {
        let specs = self
            .specs
            .get(kind);

        let mut report = match kind {
            DrsKind::FileName => self.validate_with_extension(expression, specs)?,
            _ => self.validate_expression(expression, expression, specs)?,
        };

        if self.pedantic {
            report.promote_warnings();
        }

        debug!("{}", report);
        Ok(report)
    }

    fn validate_with_extension(
        &self,
        expression: &str,
        specs: &DrsSpecification,
    ) -> Result<ValidationReport, VocabularyError> {
        // checked when the specifications were selected
        let extension = specs
            .full_extension()
            .unwrap_or_default();

        match expression.strip_suffix(extension.as_str()) {
            Some(stem) => self.validate_expression(expression, stem, specs),
            None => Ok(self.report(
                expression,
                specs.kind,
                vec![Issue::FileNameExtension {
                    expected_extension: extension,
                }],
                vec![],
            )),
        }
    }

    /// Tokenize `stem` and check its tokens against the parts of the
    /// specification. The report carries `expression` as given.
    fn validate_expression(
        &self,
        expression: &str,
        stem: &str,
        specs: &DrsSpecification,
    ) -> Result<ValidationReport, VocabularyError> {
        let tokenized = tokenize(stem, &specs.separator, specs.kind, self.pedantic);

        let mut errors = tokenized.errors;
        let mut warnings = tokenized.warnings;

        // with every token removed, each part is reported missing below
        let tokens = match tokenized.tokens {
            Some(tokens) => tokens,
            None => return Ok(self.report(expression, specs.kind, errors, warnings)),
        };

        let parts = &specs.parts;
        let mut outcomes = vec![Outcome::Invalid; parts.len()];

        let mut t = 0;
        let mut p = 0;

        while t < tokens.len() && p < parts.len() {
            let token = tokens[t];
            let part = &parts[p];

            if self.matches(token, part)? {
                debug!("Token '{}' matches {}", token, part);
                outcomes[p] = Outcome::Matched;
                t += 1;
                p += 1;
            } else if part.is_required() {
                errors.push(Issue::InvalidToken {
                    token: token.to_string(),
                    position: t + 1,
                    collection_id_or_constant_value: part
                        .label()
                        .to_string(),
                });
                t += 1;
                p += 1;
            } else {
                // the same token is tried against the next part
                debug!("Skipping optional {} for token '{}'", part, token);
                outcomes[p] = Outcome::Skipped;
                p += 1;
            }
        }

        if p < parts.len() {
            for (index, part) in parts
                .iter()
                .enumerate()
                .skip(p)
            {
                let issue = Issue::MissingToken {
                    collection_id: part
                        .label()
                        .to_string(),
                    position: index + 1,
                };
                if part.is_required() {
                    errors.push(issue);
                } else {
                    warnings.push(issue);
                }
            }
        } else if t < tokens.len() {
            let extras = tokens.len() - t;
            for (k, index) in (t..tokens.len()).enumerate() {
                // the k-th extra token lines up with a part counted back from
                // the end, which may be the optional collection that rejected it
                let collection_id = (parts.len() + k)
                    .checked_sub(extras)
                    .and_then(|q| match (&parts[q], outcomes[q]) {
                        (
                            Part::Collection {
                                collection_id,
                                is_required: false,
                            },
                            Outcome::Skipped,
                        ) => Some(collection_id.clone()),
                        _ => None,
                    });

                errors.push(Issue::ExtraToken {
                    token: tokens[index].to_string(),
                    position: index,
                    collection_id,
                });
            }
        }

        Ok(self.report(expression, specs.kind, errors, warnings))
    }

    fn matches(&self, token: &str, part: &Part) -> Result<bool, VocabularyError> {
        match part {
            Part::Constant { value } => Ok(token == value),
            Part::Collection { collection_id, .. } => self
                .vocabulary
                .term_exists_in_collection(&self.project_id, collection_id, token),
        }
    }

    fn report(
        &self,
        expression: &str,
        kind: DrsKind,
        errors: Vec<Issue>,
        warnings: Vec<Issue>,
    ) -> ValidationReport {
        ValidationReport {
            project_id: self
                .project_id
                .clone(),
            kind,
            expression: expression.to_string(),
            errors,
            warnings,
        }
    }
}
