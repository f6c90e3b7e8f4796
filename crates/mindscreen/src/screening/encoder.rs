use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::artifacts::{ArtifactBundle, EncoderError};
use super::catalog::CanonicalValue;
use super::domain::{Answer, FeatureField, FeatureRecord};
use super::session::ReadyAnswers;

/// Why a field could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingFailure {
    MissingAnswer,
    NotInCatalog,
    MissingEncoder,
    EncoderRejected(EncoderError),
}

impl fmt::Display for EncodingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingFailure::MissingAnswer => write!(f, "no answer recorded"),
            EncodingFailure::NotInCatalog => write!(f, "value is not in the option catalog"),
            EncodingFailure::MissingEncoder => write!(f, "no label encoder configured"),
            EncodingFailure::EncoderRejected(err) => write!(f, "{err}"),
        }
    }
}

/// Catalog/encoder disagreement for one field. Aborts the submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not encode {field} value '{raw}': {reason}")]
pub struct EncodingError {
    pub field: FeatureField,
    pub raw: String,
    pub reason: EncodingFailure,
}

/// Reduces a complete answer set to the classifier's numeric feature row.
#[derive(Debug, Clone)]
pub struct InputEncoder {
    artifacts: Arc<ArtifactBundle>,
}

impl InputEncoder {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    pub fn encode(&self, answers: &ReadyAnswers<'_>) -> Result<FeatureRecord, EncodingError> {
        let mut values = [0.0; FeatureField::COUNT];
        for field in FeatureField::ordered() {
            values[field.index()] = self.encode_field(answers, field)?;
        }

        let record = FeatureRecord::from_values(values);
        debug!(locale = %answers.locale(), ?record, "answers encoded");
        Ok(record)
    }

    fn encode_field(
        &self,
        answers: &ReadyAnswers<'_>,
        field: FeatureField,
    ) -> Result<f64, EncodingError> {
        let answer = answers.get(field).ok_or_else(|| EncodingError {
            field,
            raw: String::new(),
            reason: EncodingFailure::MissingAnswer,
        })?;

        let display = match answer {
            Answer::Number(value) => return Ok(f64::from(*value)),
            Answer::Choice(display) => display.as_str(),
        };

        let fail = |reason| EncodingError {
            field,
            raw: display.to_string(),
            reason,
        };

        let canonical = answers
            .catalog()
            .canonical(field, display)
            .ok_or_else(|| fail(EncodingFailure::NotInCatalog))?;

        match canonical {
            CanonicalValue::Rank(rank) => Ok(f64::from(rank)),
            CanonicalValue::Hours(hours) => Ok(f64::from(hours)),
            CanonicalValue::Category(category) => {
                let encoder = self
                    .artifacts
                    .encoder(field)
                    .ok_or_else(|| fail(EncodingFailure::MissingEncoder))?;
                let code = encoder
                    .transform(category)
                    .map_err(|err| fail(EncodingFailure::EncoderRejected(err)))?;
                Ok(code as f64)
            }
        }
    }
}
