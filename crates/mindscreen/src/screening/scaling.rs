use std::sync::Arc;

use tracing::debug;

use super::artifacts::{ArtifactBundle, ScalingError};
use super::domain::{FeatureField, FeatureRecord, ScaledRecord};

/// Runs the fitted scaler over all ten columns, then puts raw age back.
///
/// The scaler was fitted with age included, but the classifier was trained on
/// unscaled age. Both facts are fixed properties of the artifact bundle.
#[derive(Debug, Clone)]
pub struct FeatureScalerAdapter {
    artifacts: Arc<ArtifactBundle>,
}

impl FeatureScalerAdapter {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    pub fn scale(&self, record: &FeatureRecord) -> Result<ScaledRecord, ScalingError> {
        let scaled = self.artifacts.scaler().transform(record.as_slice())?;
        let mut values: [f64; FeatureField::COUNT] =
            scaled.try_into().map_err(|rejected: Vec<f64>| ScalingError::ColumnCount {
                expected: FeatureField::COUNT,
                found: rejected.len(),
            })?;
        values[FeatureField::Age.index()] = record.get(FeatureField::Age);

        let scaled = ScaledRecord::from_values(values);
        debug!(?scaled, "features scaled");
        Ok(scaled)
    }
}
