use serde::{Deserialize, Serialize};

use super::catalog::CatalogBundle;
use super::domain::{Answer, AnswerSet, FeatureField, AGE_RANGE, STUDY_HOURS_RANGE};
use super::locale::Locale;

/// Raw value as submitted by a form or API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Number(i64),
    Text(String),
}

impl From<&str> for AnswerInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for AnswerInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Entry-time rejection. The offending value never reaches the answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputRejected {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: FeatureField,
        value: i64,
        min: u8,
        max: u8,
    },
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: FeatureField, value: String },
    #[error("{field} expects a whole number, got '{value}'")]
    ExpectedNumber { field: FeatureField, value: String },
    #[error("{field} expects one of the listed options")]
    ExpectedChoice { field: FeatureField },
}

impl InputRejected {
    pub fn field(&self) -> FeatureField {
        match self {
            InputRejected::OutOfRange { field, .. }
            | InputRejected::UnknownOption { field, .. }
            | InputRejected::ExpectedNumber { field, .. }
            | InputRejected::ExpectedChoice { field } => *field,
        }
    }
}

/// Validator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormState {
    Incomplete { missing: Vec<FeatureField> },
    Ready,
}

/// Answers collected for one locale-bound screening session.
#[derive(Debug, Clone)]
pub struct FormSession {
    locale: Locale,
    catalog: &'static CatalogBundle,
    answers: AnswerSet,
}

impl FormSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            catalog: CatalogBundle::for_locale(locale),
            answers: AnswerSet::default(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'static CatalogBundle {
        self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Pick a display string for a selection field. The sentinel clears the field.
    pub fn select(&mut self, field: FeatureField, display: &str) -> Result<(), InputRejected> {
        if field == FeatureField::Age {
            return Err(InputRejected::ExpectedNumber {
                field,
                value: display.to_string(),
            });
        }

        if self.catalog.is_sentinel(display) {
            self.answers.remove(field);
            return Ok(());
        }

        let display = display.trim();
        if self.catalog.canonical(field, display).is_none() {
            return Err(InputRejected::UnknownOption {
                field,
                value: display.to_string(),
            });
        }

        self.answers.insert(field, Answer::Choice(display.to_string()));
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), InputRejected> {
        let age = bounded(FeatureField::Age, age, AGE_RANGE.start(), AGE_RANGE.end())?;
        self.answers.insert(FeatureField::Age, Answer::Number(age));
        Ok(())
    }

    /// Study hours come from a discrete choice list; numeric input is mapped onto it.
    pub fn set_study_hours(&mut self, hours: i64) -> Result<(), InputRejected> {
        let hours = bounded(
            FeatureField::StudyHours,
            hours,
            STUDY_HOURS_RANGE.start(),
            STUDY_HOURS_RANGE.end(),
        )?;
        self.answers
            .insert(FeatureField::StudyHours, Answer::Choice(hours.to_string()));
        Ok(())
    }

    pub fn clear(&mut self, field: FeatureField) {
        self.answers.remove(field);
    }

    /// Route a raw client value to the matching entry point.
    pub fn apply(&mut self, field: FeatureField, input: &AnswerInput) -> Result<(), InputRejected> {
        match (field, input) {
            (FeatureField::Age, AnswerInput::Number(value)) => self.set_age(*value),
            (FeatureField::Age, AnswerInput::Text(raw)) => {
                if raw.trim().is_empty() || self.catalog.is_sentinel(raw) {
                    self.clear(field);
                    return Ok(());
                }
                let value = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| InputRejected::ExpectedNumber {
                        field,
                        value: raw.clone(),
                    })?;
                self.set_age(value)
            }
            (FeatureField::StudyHours, AnswerInput::Number(value)) => self.set_study_hours(*value),
            (_, AnswerInput::Text(raw)) => self.select(field, raw),
            (_, AnswerInput::Number(_)) => Err(InputRejected::ExpectedChoice { field }),
        }
    }

    pub fn missing_fields(&self) -> Vec<FeatureField> {
        FeatureField::ordered()
            .into_iter()
            .filter(|field| !self.answers.contains(*field))
            .collect()
    }

    pub fn state(&self) -> FormState {
        let missing = self.missing_fields();
        if missing.is_empty() {
            FormState::Ready
        } else {
            FormState::Incomplete { missing }
        }
    }

    /// Completeness gate. Only a `Ready` session yields answers the encoder accepts.
    pub fn ready(&self) -> Result<ReadyAnswers<'_>, Vec<FeatureField>> {
        match self.state() {
            FormState::Ready => Ok(ReadyAnswers {
                catalog: self.catalog,
                answers: &self.answers,
            }),
            FormState::Incomplete { missing } => Err(missing),
        }
    }
}

fn bounded(field: FeatureField, value: i64, min: &u8, max: &u8) -> Result<u8, InputRejected> {
    let (min, max) = (*min, *max);
    if value < i64::from(min) || value > i64::from(max) {
        return Err(InputRejected::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as u8)
}

/// A complete answer set, borrowed from a session that passed the gate.
#[derive(Debug, Clone, Copy)]
pub struct ReadyAnswers<'a> {
    catalog: &'static CatalogBundle,
    answers: &'a AnswerSet,
}

impl<'a> ReadyAnswers<'a> {
    #[cfg(test)]
    pub(crate) fn assume_ready(locale: Locale, answers: &'a AnswerSet) -> Self {
        Self {
            catalog: CatalogBundle::for_locale(locale),
            answers,
        }
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> &'static CatalogBundle {
        self.catalog
    }

    pub fn get(&self, field: FeatureField) -> Option<&'a Answer> {
        self.answers.get(field)
    }
}
