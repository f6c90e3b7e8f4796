use serde::{Deserialize, Serialize};

/// Pre-fitted transform over a full feature row.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ScalingError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScalingError {
    #[error("scaler expects {expected} columns, received {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("scaler produced a non-finite value for column {column}")]
    NonFinite { column: usize },
}

/// Zero-mean, unit-variance scaler described by per-column mean and scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn columns(&self) -> usize {
        self.mean.len()
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ScalingError> {
        if row.len() != self.mean.len() || row.len() != self.scale.len() {
            return Err(ScalingError::ColumnCount {
                expected: self.mean.len(),
                found: row.len(),
            });
        }

        row.iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .enumerate()
            .map(|(column, (value, (mean, scale)))| {
                // constant columns are fitted with a zero scale
                let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                let scaled = (value - mean) / divisor;
                if scaled.is_finite() {
                    Ok(scaled)
                } else {
                    Err(ScalingError::NonFinite { column })
                }
            })
            .collect()
    }
}
