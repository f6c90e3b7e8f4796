use metrics_exporter_prometheus::PrometheusHandle;
use mindscreen::config::ScreeningConfig;
use mindscreen::error::AppError;
use mindscreen::screening::{
    ArtifactBundle, DatasetSummary, Locale, ReferenceDataset, ScreeningService,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fails fast: no screening service exists without a valid artifact bundle.
pub(crate) fn load_service(
    config: &ScreeningConfig,
    artifact_override: Option<PathBuf>,
) -> Result<Arc<ScreeningService>, AppError> {
    let path = artifact_override.unwrap_or_else(|| config.artifact_path.clone());
    let bundle = ArtifactBundle::load(&path)?;
    Ok(Arc::new(ScreeningService::new(Arc::new(bundle))))
}

pub(crate) fn load_dataset(config: &ScreeningConfig) -> Option<Arc<DatasetSummary>> {
    ReferenceDataset::load_optional(&config.dataset_paths).map(Arc::new)
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unsupported locale '{raw}' (expected 'id' or 'en')"))
}
