use metrics_exporter_prometheus::PrometheusHandle;
use salary_insights::config::{AppConfig, DatasetConfig};
use salary_insights::error::AppError;
use salary_insights::salaries::{
    compute_dashboard_views_with_limit, render_dashboard, ChartTheme, DashboardCharts,
    DatasetError, RecordStore,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard: Arc<Dashboard>,
}

/// The loaded store plus the presentation settings every request shares.
#[derive(Debug)]
pub(crate) struct Dashboard {
    pub(crate) store: RecordStore,
    pub(crate) top_paying_limit: usize,
    pub(crate) theme: ChartTheme,
}

impl Dashboard {
    pub(crate) fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let store = RecordStore::from_path(&config.path)?;
        Ok(Self {
            store,
            top_paying_limit: config.top_paying_limit,
            theme: config.theme,
        })
    }

    pub(crate) fn job_titles(&self) -> Result<Vec<&str>, DatasetError> {
        self.store.job_title_options()
    }

    /// The selector's initial value: the first title in the dataset.
    pub(crate) fn default_job_title(&self) -> Option<&str> {
        self.store.distinct_job_titles().into_iter().next()
    }

    pub(crate) fn charts(&self, job_title: &str) -> DashboardCharts {
        let views =
            compute_dashboard_views_with_limit(&self.store, job_title, self.top_paying_limit);
        render_dashboard(&views, self.top_paying_limit, self.theme)
    }
}

/// Loads configuration for the offline commands, applying a dataset override.
pub(crate) fn load_dashboard(dataset: Option<PathBuf>) -> Result<Dashboard, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = dataset {
        config.dataset.path = path;
    }
    Ok(Dashboard::load(&config.dataset)?)
}
