use std::sync::Arc;

use tracing::debug;

use super::artifacts::{ArtifactBundle, PredictionError};
use super::domain::{PredictionResult, ScaledRecord};

/// Single-record inference. No retries, batching, or caching.
#[derive(Debug, Clone)]
pub struct InferenceService {
    artifacts: Arc<ArtifactBundle>,
}

impl InferenceService {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    pub fn predict(&self, record: &ScaledRecord) -> Result<PredictionResult, PredictionError> {
        let label = self.artifacts.classifier().predict(record.as_slice())?;
        let result =
            PredictionResult::from_label(label).ok_or(PredictionError::UnexpectedLabel(label))?;
        debug!(label, "classifier returned");
        Ok(result)
    }
}
