use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::screening::artifacts::{
    ArtifactBundle, CategoricalEncoder, Classifier, FeatureScaler, LabelEncoder, PredictionError,
    ScalingError,
};
use crate::screening::catalog::CatalogBundle;
use crate::screening::domain::FeatureField;
use crate::screening::locale::Locale;
use crate::screening::service::ScreeningService;
use crate::screening::session::FormSession;

pub(super) const DEMO_BUNDLE: &str = include_str!("../../../../../artifacts/model_depression.json");

/// Encoded row for the reference scenario under the canonical encoders.
pub(super) const SCENARIO_ROW: [f64; FeatureField::COUNT] =
    [1.0, 22.0, 4.0, 2.0, 0.0, 2.0, 1.0, 8.0, 5.0, 1.0];

pub(super) fn canonical_classes(field: FeatureField) -> Vec<&'static str> {
    CatalogBundle::for_locale(Locale::English)
        .categories(field)
        .into_iter()
        .collect()
}

pub(super) fn canonical_encoders() -> BTreeMap<FeatureField, Box<dyn CategoricalEncoder>> {
    FeatureField::categorical()
        .into_iter()
        .map(|field| {
            let encoder = LabelEncoder::new(canonical_classes(field)).expect("distinct classes");
            (field, Box::new(encoder) as Box<dyn CategoricalEncoder>)
        })
        .collect()
}

/// Affine stand-in for the fitted scaler: `x * 10 + 1` on every column.
pub(super) struct AffineScaler;

impl FeatureScaler for AffineScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ScalingError> {
        if row.len() != FeatureField::COUNT {
            return Err(ScalingError::ColumnCount {
                expected: FeatureField::COUNT,
                found: row.len(),
            });
        }
        Ok(row.iter().map(|value| value * 10.0 + 1.0).collect())
    }
}

/// Scaler that drops the last column, as a mis-fitted artifact would.
pub(super) struct TruncatingScaler;

impl FeatureScaler for TruncatingScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ScalingError> {
        Ok(row[..row.len() - 1].to_vec())
    }
}

/// Scaler fitted on a different column count.
pub(super) struct MisfitScaler;

impl FeatureScaler for MisfitScaler {
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ScalingError> {
        Err(ScalingError::ColumnCount {
            expected: 12,
            found: row.len(),
        })
    }
}

/// Classifier returning a fixed label and remembering each row it saw.
#[derive(Clone, Default)]
pub(super) struct RecordingClassifier {
    label: u8,
    rows: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl RecordingClassifier {
    pub(super) fn returning(label: u8) -> Self {
        Self {
            label,
            rows: Arc::default(),
        }
    }

    pub(super) fn rows(&self) -> Vec<Vec<f64>> {
        self.rows.lock().expect("rows mutex poisoned").clone()
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, row: &[f64]) -> Result<u8, PredictionError> {
        self.rows
            .lock()
            .expect("rows mutex poisoned")
            .push(row.to_vec());
        Ok(self.label)
    }
}

pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, row: &[f64]) -> Result<u8, PredictionError> {
        Err(PredictionError::ShapeMismatch {
            expected: 11,
            found: row.len(),
        })
    }
}

pub(super) fn bundle_with(
    classifier: impl Classifier + 'static,
    scaler: impl FeatureScaler + 'static,
) -> Arc<ArtifactBundle> {
    Arc::new(
        ArtifactBundle::new(Box::new(classifier), Box::new(scaler), canonical_encoders())
            .expect("canonical encoders agree with catalogs"),
    )
}

pub(super) fn demo_bundle() -> Arc<ArtifactBundle> {
    Arc::new(ArtifactBundle::from_reader(DEMO_BUNDLE.as_bytes()).expect("demo bundle loads"))
}

pub(super) fn recording_service(label: u8) -> (ScreeningService, RecordingClassifier) {
    let classifier = RecordingClassifier::returning(label);
    let service = ScreeningService::new(bundle_with(classifier.clone(), AffineScaler));
    (service, classifier)
}

/// Fills a session with the reference scenario using the locale's own display strings.
pub(super) fn scenario_session(locale: Locale) -> FormSession {
    let catalog = CatalogBundle::for_locale(locale);
    let mut session = FormSession::new(locale);

    let category = |field, value| {
        catalog
            .display_for_category(field, value)
            .expect("category listed in catalog")
    };
    let rank = |field, value| {
        catalog
            .display_for_rank(field, value)
            .expect("rank listed in catalog")
    };

    session
        .select(FeatureField::Gender, category(FeatureField::Gender, "Male"))
        .expect("gender accepted");
    session.set_age(22).expect("age accepted");
    session
        .select(
            FeatureField::AcademicPressure,
            rank(FeatureField::AcademicPressure, 4),
        )
        .expect("pressure accepted");
    session
        .select(
            FeatureField::StudySatisfaction,
            rank(FeatureField::StudySatisfaction, 2),
        )
        .expect("satisfaction accepted");
    session
        .select(
            FeatureField::SleepDuration,
            category(FeatureField::SleepDuration, "5-6 hours"),
        )
        .expect("sleep accepted");
    session
        .select(
            FeatureField::DietaryHabits,
            category(FeatureField::DietaryHabits, "Unhealthy"),
        )
        .expect("diet accepted");
    session
        .select(
            FeatureField::SuicidalThoughts,
            category(FeatureField::SuicidalThoughts, "Yes"),
        )
        .expect("suicidal thoughts accepted");
    session.select(FeatureField::StudyHours, "8").expect("hours accepted");
    session
        .select(
            FeatureField::FinancialStress,
            rank(FeatureField::FinancialStress, 5),
        )
        .expect("financial stress accepted");
    session
        .select(
            FeatureField::FamilyHistory,
            category(FeatureField::FamilyHistory, "Yes"),
        )
        .expect("family history accepted");

    session
}

pub(super) fn english_request_body() -> Value {
    serde_json::json!({
        "locale": "en",
        "answers": {
            "gender": "Male",
            "age": 22,
            "academic_pressure": "Heavy",
            "study_satisfaction": "Dissatisfied",
            "sleep_duration": "5-6 hours",
            "dietary_habits": "Unhealthy",
            "suicidal_thoughts": "Yes",
            "study_hours": 8,
            "financial_stress": "Very high",
            "family_history": "Yes"
        }
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status code");
}
