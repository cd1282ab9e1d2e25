//! Answer Sheet Adapter
//!
//! A study's pre-collected answers for several domains, stored as YAML or
//! JSON. Answers are kept as raw instrument codes so that a malformed value
//! surfaces as `InvalidAnswer` for the exact slot rather than as a parse
//! failure of the whole sheet.
//!
//! ```yaml
//! study: TRIAL-042
//! domains:
//!   domain_1_randomization:
//!     "1.1": Y
//!     "1.2": PY
//!     "1.3": N
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::{Answer, AnswerState, AssessmentError, DomainKey, Question};
use crate::domain::instrument::DomainDescriptor;
use crate::ports::{AnswerSource, AnswerSourceError};

/// Errors raised while loading or reading an answer sheet
#[derive(Debug, Error)]
pub enum AnswerSheetError {
    #[error("Failed to read answer sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported answer sheet format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid YAML answer sheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON answer sheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Raw answers for one study, keyed by domain slug then question code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study: Option<String>,

    #[serde(default)]
    pub domains: BTreeMap<String, BTreeMap<String, String>>,
}

impl AnswerSheet {
    /// Create an empty sheet for a study
    pub fn new(study: impl Into<String>) -> Self {
        Self {
            study: Some(study.into()),
            domains: BTreeMap::new(),
        }
    }

    /// Record one answer
    pub fn with_answer(mut self, domain: DomainKey, question: &str, answer: Answer) -> Self {
        self.domains
            .entry(domain.slug().to_string())
            .or_default()
            .insert(question.to_string(), answer.code().to_string());
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, AnswerSheetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, AnswerSheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a sheet, choosing the format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnswerSheetError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| AnswerSheetError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            other => Err(AnswerSheetError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn to_yaml(&self) -> Result<String, AnswerSheetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that every domain entry names a registered domain
    pub fn validate_domains(&self) -> Result<(), AnswerSheetError> {
        for slug in self.domains.keys() {
            slug.parse::<DomainKey>()?;
        }
        Ok(())
    }

    /// Raw answers for a domain; also matches legacy slug spellings
    fn raw_answers(&self, key: DomainKey) -> Option<&BTreeMap<String, String>> {
        self.domains
            .iter()
            .find(|(slug, _)| slug.parse::<DomainKey>().ok() == Some(key))
            .map(|(_, answers)| answers)
    }

    /// Parsed answer state for one domain; empty when the domain is absent
    pub fn state_for(&self, key: DomainKey) -> Result<AnswerState, AnswerSheetError> {
        let mut state = AnswerState::new();
        if let Some(answers) = self.raw_answers(key) {
            for (code, raw) in answers {
                state.record_code(code.as_str(), raw)?;
            }
        }
        Ok(state)
    }
}

impl AnswerSource for AnswerSheet {
    fn answer(
        &self,
        domain: &DomainDescriptor,
        question: &Question,
    ) -> Result<Answer, AnswerSourceError> {
        let raw = self
            .raw_answers(domain.key())
            .and_then(|answers| answers.get(question.code))
            .ok_or_else(|| AnswerSourceError::no_answer(domain, question))?;

        Answer::from_code(raw).ok_or_else(|| {
            AssessmentError::invalid_answer(
                question.code,
                format!("'{}' is not an answer code", raw),
            )
            .into()
        })
    }
}
