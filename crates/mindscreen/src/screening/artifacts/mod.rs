//! Externally-fitted classifier, scaler, and label encoders.
//!
//! The bundle is loaded once at startup and shared read-only by every
//! session. Loading validates the feature order and vector shapes, then
//! checks that each categorical encoder accepts exactly the canonical values
//! the option catalogs produce in both locales.

mod classifier;
mod label_encoder;
mod scaler;

pub use classifier::{Classifier, LogisticRegression, PredictionError};
pub use label_encoder::{CategoricalEncoder, EncoderError, LabelEncoder};
pub use scaler::{FeatureScaler, ScalingError, StandardScaler};

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::CatalogBundle;
use super::domain::FeatureField;
use super::locale::Locale;

/// Startup failure. The service never accepts submissions without a valid bundle.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("failed to read artifact bundle at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("artifact bundle lists {found} features, expected {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("feature {position} is '{found}', expected '{expected}'")]
    FeatureOrder {
        position: usize,
        expected: &'static str,
        found: String,
    },
    #[error("{component} has {found} entries, expected {expected}")]
    Dimension {
        component: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("classifier threshold {0} must lie within [0, 1]")]
    Threshold(f64),
    #[error("no label encoder for categorical field '{0}'")]
    MissingEncoder(FeatureField),
    #[error("label encoder provided for non-categorical column '{0}'")]
    UnexpectedEncoder(String),
    #[error("label encoder for '{field}' lists class '{class}' twice")]
    DuplicateClass { field: FeatureField, class: String },
    #[error(
        "label encoder for '{field}' disagrees with the {locale} catalog \
         (missing {missing:?}, unexpected {unexpected:?})"
    )]
    VocabularyMismatch {
        field: FeatureField,
        locale: Locale,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// On-disk layout of the bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleDocument {
    pub feature_names: Vec<String>,
    pub scaler: StandardScaler,
    pub model: LogisticRegression,
    pub encoders: BTreeMap<String, EncoderDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderDocument {
    pub classes: Vec<String>,
}

/// Immutable classifier, scaler, and per-field encoders.
pub struct ArtifactBundle {
    classifier: Box<dyn Classifier>,
    scaler: Box<dyn FeatureScaler>,
    encoders: BTreeMap<FeatureField, Box<dyn CategoricalEncoder>>,
}

impl std::fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("encoders", &self.encoders.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ArtifactBundle {
    /// Assemble a bundle from injected components, verifying encoder vocabularies.
    pub fn new(
        classifier: Box<dyn Classifier>,
        scaler: Box<dyn FeatureScaler>,
        encoders: BTreeMap<FeatureField, Box<dyn CategoricalEncoder>>,
    ) -> Result<Self, ArtifactLoadError> {
        let bundle = Self::from_parts(classifier, scaler, encoders);
        bundle.verify_vocabularies()?;
        Ok(bundle)
    }

    pub(crate) fn from_parts(
        classifier: Box<dyn Classifier>,
        scaler: Box<dyn FeatureScaler>,
        encoders: BTreeMap<FeatureField, Box<dyn CategoricalEncoder>>,
    ) -> Self {
        Self {
            classifier,
            scaler,
            encoders,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), "artifact bundle loaded");
        Ok(bundle)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactLoadError> {
        let document: BundleDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_document(document: BundleDocument) -> Result<Self, ArtifactLoadError> {
        check_feature_order(&document.feature_names)?;
        check_dimension("scaler mean", document.scaler.mean.len())?;
        check_dimension("scaler scale", document.scaler.scale.len())?;
        check_dimension("model coefficients", document.model.coefficients.len())?;

        let threshold = document.model.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ArtifactLoadError::Threshold(threshold));
        }

        let mut encoders: BTreeMap<FeatureField, Box<dyn CategoricalEncoder>> = BTreeMap::new();
        for (name, encoder) in document.encoders {
            let field = FeatureField::from_feature_name(&name)
                .filter(|field| FeatureField::categorical().contains(field))
                .ok_or_else(|| ArtifactLoadError::UnexpectedEncoder(name.clone()))?;
            let encoder = LabelEncoder::new(encoder.classes)
                .map_err(|class| ArtifactLoadError::DuplicateClass { field, class })?;
            encoders.insert(field, Box::new(encoder));
        }

        Self::new(
            Box::new(document.model),
            Box::new(document.scaler),
            encoders,
        )
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> &dyn FeatureScaler {
        self.scaler.as_ref()
    }

    pub fn encoder(&self, field: FeatureField) -> Option<&dyn CategoricalEncoder> {
        self.encoders.get(&field).map(|encoder| encoder.as_ref())
    }

    /// Every categorical field must have an encoder whose classes equal the
    /// catalog's canonical values, in both locales.
    pub fn verify_vocabularies(&self) -> Result<(), ArtifactLoadError> {
        for field in FeatureField::categorical() {
            let encoder = self
                .encoder(field)
                .ok_or(ArtifactLoadError::MissingEncoder(field))?;
            let accepted: BTreeSet<&str> = encoder.classes().into_iter().collect();

            for locale in Locale::ordered() {
                let produced = CatalogBundle::for_locale(locale).categories(field);
                if produced == accepted {
                    continue;
                }

                return Err(ArtifactLoadError::VocabularyMismatch {
                    field,
                    locale,
                    missing: produced
                        .difference(&accepted)
                        .map(|value| value.to_string())
                        .collect(),
                    unexpected: accepted
                        .difference(&produced)
                        .map(|value| value.to_string())
                        .collect(),
                });
            }
        }

        Ok(())
    }
}

fn check_feature_order(names: &[String]) -> Result<(), ArtifactLoadError> {
    if names.len() != FeatureField::COUNT {
        return Err(ArtifactLoadError::FeatureCount {
            expected: FeatureField::COUNT,
            found: names.len(),
        });
    }

    for (position, (field, name)) in FeatureField::ordered().iter().zip(names).enumerate() {
        if field.feature_name() != name.trim() {
            return Err(ArtifactLoadError::FeatureOrder {
                position,
                expected: field.feature_name(),
                found: name.clone(),
            });
        }
    }

    Ok(())
}

fn check_dimension(component: &'static str, found: usize) -> Result<(), ArtifactLoadError> {
    if found == FeatureField::COUNT {
        Ok(())
    } else {
        Err(ArtifactLoadError::Dimension {
            component,
            expected: FeatureField::COUNT,
            found,
        })
    }
}
