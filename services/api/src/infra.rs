use hireboard::config::{AppConfig, DatasetConfig};
use hireboard::error::AppError;
use hireboard::recruiting::DatasetStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Environment-derived dataset settings with CLI overrides applied on top.
pub(crate) fn dataset_config(
    seed: Option<u64>,
    job_count: Option<usize>,
    report_count: Option<usize>,
) -> Result<DatasetConfig, AppError> {
    let mut config = AppConfig::load()?.dataset;
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(job_count) = job_count {
        config.job_count = job_count;
    }
    if let Some(report_count) = report_count {
        config.report_count = report_count;
    }
    Ok(config)
}

pub(crate) fn build_store(config: &DatasetConfig) -> Arc<DatasetStore> {
    Arc::new(DatasetStore::generate(config))
}
