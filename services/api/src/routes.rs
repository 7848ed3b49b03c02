use crate::infra::AppState;
use crate::page;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use salary_insights::error::AppError;
use salary_insights::salaries::{DashboardCharts, DatasetError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) job_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct JobTitlesResponse {
    pub(crate) job_titles: Vec<String>,
    pub(crate) default_job_title: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) record_count: usize,
    #[serde(flatten)]
    pub(crate) charts: DashboardCharts,
}

pub(crate) fn dashboard_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/job-titles", get(job_titles_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .with_state(state)
}

pub(crate) async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(page::render(state.dashboard.theme))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn job_titles_endpoint(
    State(state): State<AppState>,
) -> Result<Json<JobTitlesResponse>, AppError> {
    let job_titles: Vec<String> = state
        .dashboard
        .job_titles()?
        .into_iter()
        .map(str::to_string)
        .collect();
    let default_job_title = job_titles.first().cloned().ok_or(DatasetError::Empty)?;

    Ok(Json(JobTitlesResponse {
        job_titles,
        default_job_title,
    }))
}

/// Computes all four charts for one selection. Without a `job_title` the
/// first title in the dataset is used, as the selector does on page load.
pub(crate) async fn dashboard_endpoint(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let requested = query
        .job_title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty());
    let job_title = match requested {
        Some(title) => title,
        None => state
            .dashboard
            .default_job_title()
            .map(str::to_string)
            .ok_or(DatasetError::Empty)?,
    };

    let charts = state.dashboard.charts(&job_title);
    debug!(
        job_title = %job_title,
        trend_points = charts.trend.point_count(),
        "computed dashboard views"
    );

    Ok(Json(DashboardResponse {
        generated_at: Utc::now(),
        record_count: state.dashboard.store.len(),
        charts,
    }))
}
