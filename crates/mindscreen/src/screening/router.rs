use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::dataset::DatasetSummary;
use super::domain::{FeatureField, FeatureRecord, PredictionResult, ScaledRecord};
use super::locale::Locale;
use super::presenter::{FormSchema, Notice, NoticeKind, ResultCopy};
use super::service::{ScreeningOutcome, ScreeningService, SubmissionError};
use super::session::{AnswerInput, FormSession};

/// Shared, read-only state behind the screening endpoints.
#[derive(Clone)]
pub struct ScreeningState {
    pub service: Arc<ScreeningService>,
    pub dataset: Option<Arc<DatasetSummary>>,
    /// Used when a request names no locale.
    pub default_locale: Locale,
}

/// Router builder exposing the form schema, prediction, and dataset endpoints.
pub fn screening_router(
    service: Arc<ScreeningService>,
    dataset: Option<Arc<DatasetSummary>>,
    default_locale: Locale,
) -> Router {
    Router::new()
        .route("/api/v1/screening/form", get(form_handler))
        .route("/api/v1/screening/predict", post(predict_handler))
        .route("/api/v1/screening/dataset", get(dataset_handler))
        .with_state(ScreeningState {
            service,
            dataset,
            default_locale,
        })
}

#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub answers: BTreeMap<FeatureField, AnswerInput>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub locale: Locale,
    pub label: u8,
    pub prediction: PredictionResult,
    pub features: FeatureRecord,
    pub scaled: ScaledRecord,
    pub result: &'static ResultCopy,
    pub evaluated_at: DateTime<Utc>,
}

impl From<ScreeningOutcome> for PredictionResponse {
    fn from(outcome: ScreeningOutcome) -> Self {
        Self {
            locale: outcome.locale,
            label: outcome.label(),
            prediction: outcome.prediction,
            features: outcome.features,
            scaled: outcome.scaled,
            result: outcome.copy,
            evaluated_at: Utc::now(),
        }
    }
}

/// Malformed bodies and query strings get the same localized notice as rejected answers.
fn malformed_request(locale: Locale, detail: String) -> Response {
    let payload = json!({
        "notice": Notice::new(NoticeKind::InvalidInput, locale, Some(detail)),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn form_handler(
    State(state): State<ScreeningState>,
    query: Result<Query<FormQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => {
            let locale = query.locale.unwrap_or(state.default_locale);
            Json(FormSchema::for_locale(locale)).into_response()
        }
        Err(rejection) => malformed_request(state.default_locale, rejection.body_text()),
    }
}

pub(crate) async fn predict_handler(
    State(state): State<ScreeningState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(status = %rejection.status(), "prediction request rejected");
            return malformed_request(state.default_locale, rejection.body_text());
        }
    };
    let locale = request.locale.unwrap_or(state.default_locale);
    let mut session = FormSession::new(locale);

    for (field, input) in &request.answers {
        if let Err(rejected) = session.apply(*field, input) {
            let notice = Notice::new(NoticeKind::InvalidInput, locale, Some(rejected.to_string()));
            let payload = json!({
                "notice": notice,
                "field": rejected.field(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    }

    match state.service.submit(&session) {
        Ok(outcome) => {
            (StatusCode::OK, Json(PredictionResponse::from(outcome))).into_response()
        }
        Err(SubmissionError::Incomplete { missing }) => {
            let payload = json!({
                "notice": Notice::new(NoticeKind::Incomplete, locale, None),
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "notice": other.notice(locale),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dataset_handler(State(state): State<ScreeningState>) -> Response {
    match state.dataset {
        Some(summary) => (StatusCode::OK, Json(summary.as_ref().clone())).into_response(),
        None => {
            let payload = json!({
                "error": "reference dataset not loaded",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
