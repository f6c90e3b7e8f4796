use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::artifacts::{ArtifactBundle, PredictionError, ScalingError};
use super::domain::{FeatureField, FeatureRecord, PredictionResult, ScaledRecord};
use super::encoder::{EncodingError, InputEncoder};
use super::inference::InferenceService;
use super::locale::Locale;
use super::presenter::{Notice, NoticeKind, ResultCopy, ResultPresenter};
use super::scaling::FeatureScalerAdapter;
use super::session::{FormSession, ReadyAnswers};

/// Result of one complete encode → scale → predict → present run.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub locale: Locale,
    pub features: FeatureRecord,
    pub scaled: ScaledRecord,
    pub prediction: PredictionResult,
    pub copy: &'static ResultCopy,
}

impl ScreeningOutcome {
    pub fn label(&self) -> u8 {
        self.prediction.label()
    }
}

/// Error raised by a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("answers incomplete, missing {missing:?}")]
    Incomplete { missing: Vec<FeatureField> },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Scaling(#[from] ScalingError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl SubmissionError {
    /// Only missing answers can be fixed by the user; the rest are configuration faults.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, SubmissionError::Incomplete { .. })
    }

    pub fn notice(&self, locale: Locale) -> Notice {
        match self {
            SubmissionError::Incomplete { .. } => Notice::new(NoticeKind::Incomplete, locale, None),
            SubmissionError::Encoding(err) => {
                Notice::new(NoticeKind::EncodingFailed, locale, Some(err.to_string()))
            }
            SubmissionError::Scaling(err) => {
                Notice::new(NoticeKind::PredictionFailed, locale, Some(err.to_string()))
            }
            SubmissionError::Prediction(err) => {
                Notice::new(NoticeKind::PredictionFailed, locale, Some(err.to_string()))
            }
        }
    }
}

/// Composes the encoder, scaler adapter, classifier, and presenter over one bundle.
#[derive(Debug, Clone)]
pub struct ScreeningService {
    encoder: InputEncoder,
    scaler: FeatureScalerAdapter,
    inference: InferenceService,
    presenter: ResultPresenter,
}

impl ScreeningService {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self {
            encoder: InputEncoder::new(artifacts.clone()),
            scaler: FeatureScalerAdapter::new(artifacts.clone()),
            inference: InferenceService::new(artifacts),
            presenter: ResultPresenter,
        }
    }

    /// Submit a session. The session's answers are never modified, so a failed
    /// attempt can be resubmitted as-is.
    pub fn submit(&self, session: &FormSession) -> Result<ScreeningOutcome, SubmissionError> {
        let answers = match session.ready() {
            Ok(answers) => answers,
            Err(missing) => {
                info!(
                    locale = %session.locale(),
                    missing = missing.len(),
                    "submission rejected: answers incomplete"
                );
                return Err(SubmissionError::Incomplete { missing });
            }
        };

        self.run(&answers).map_err(|err| {
            warn!(locale = %session.locale(), error = %err, "screening pipeline aborted");
            err
        })
    }

    /// Encode, scale, and classify a complete answer set.
    pub fn run(&self, answers: &ReadyAnswers<'_>) -> Result<ScreeningOutcome, SubmissionError> {
        let locale = answers.locale();
        let features = self.encoder.encode(answers)?;
        let scaled = self.scaler.scale(&features)?;
        let prediction = self.inference.predict(&scaled)?;
        let copy = self.presenter.present(prediction, locale);

        info!(%locale, label = prediction.label(), "screening completed");

        Ok(ScreeningOutcome {
            locale,
            features,
            scaled,
            prediction,
            copy,
        })
    }
}
