use serde::{Deserialize, Serialize};

/// Pre-trained binary classifier. Returns the raw class label for one row.
pub trait Classifier: Send + Sync {
    fn predict(&self, row: &[f64]) -> Result<u8, PredictionError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("classifier expects {expected} features, received {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("feature {column} is not a finite number")]
    NonFinite { column: usize },
    #[error("classifier returned label {0}, expected 0 or 1")]
    UnexpectedLabel(u8),
    #[error("classifier failure: {0}")]
    Backend(String),
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression over the finalized feature row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticRegression {
    pub fn probability(&self, row: &[f64]) -> Result<f64, PredictionError> {
        if row.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                found: row.len(),
            });
        }
        if let Some(column) = row.iter().position(|value| !value.is_finite()) {
            return Err(PredictionError::NonFinite { column });
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;

        Ok(1.0 / (1.0 + (-logit).exp()))
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, row: &[f64]) -> Result<u8, PredictionError> {
        let probability = self.probability(row)?;
        Ok(u8::from(probability >= self.threshold))
    }
}
