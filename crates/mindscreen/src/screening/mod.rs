//! Depression-risk screening: answer collection, feature encoding, scaling,
//! inference, and localized result copy.
//!
//! A [`FormSession`] gathers answers for one locale and gates submission on
//! completeness. [`ScreeningService`] then runs the encode → scale → predict →
//! present sequence against a shared, immutable [`ArtifactBundle`].

pub mod artifacts;
pub mod catalog;
pub mod dataset;
pub mod domain;
pub mod encoder;
pub mod inference;
pub mod locale;
pub mod presenter;
pub mod router;
pub mod scaling;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use artifacts::{
    ArtifactBundle, ArtifactLoadError, CategoricalEncoder, Classifier, FeatureScaler,
    LabelEncoder, LogisticRegression, PredictionError, ScalingError, StandardScaler,
};
pub use catalog::{CanonicalValue, CatalogBundle, OptionEntry};
pub use dataset::{DatasetError, DatasetSummary, ReferenceDataset};
pub use domain::{
    Answer, AnswerSet, FeatureField, FeatureRecord, FieldKind, PredictionResult, ScaledRecord,
    AGE_RANGE, STUDY_HOURS_RANGE,
};
pub use encoder::{EncodingError, EncodingFailure, InputEncoder};
pub use inference::InferenceService;
pub use locale::{Locale, UnknownLocale};
pub use presenter::{FormCopy, FormSchema, Notice, NoticeKind, ResultCopy, ResultPresenter};
pub use router::{screening_router, PredictionRequest, PredictionResponse};
pub use scaling::FeatureScalerAdapter;
pub use service::{ScreeningOutcome, ScreeningService, SubmissionError};
pub use session::{AnswerInput, FormSession, FormState, InputRejected, ReadyAnswers};
