use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::dashboard::{dashboard_summary, DashboardSummary};
use super::domain::{Applicant, Job, JobId, Report};
use super::query::{
    filter_applicants, filter_jobs, filter_reports, ApplicantFilter, JobFilter, ReportFilter,
};
use super::store::DatasetStore;
use crate::error::AppError;

/// Read-only query surface the presentation layer consumes. Every endpoint
/// derives its response from the shared session store; nothing mutates it.
pub fn recruiting_router(store: Arc<DatasetStore>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_jobs_handler))
        .route("/api/v1/jobs/active", get(active_jobs_handler))
        .route("/api/v1/jobs/:job_id", get(job_detail_handler))
        .route("/api/v1/jobs/:job_id/applicants", get(job_applicants_handler))
        .route("/api/v1/reports", get(list_reports_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .with_state(store)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobQueryParams {
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    #[serde(rename = "type")]
    job_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApplicantQueryParams {
    search: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportQueryParams {
    search: Option<String>,
    status: Option<String>,
    #[serde(rename = "type")]
    report_type: Option<String>,
}

pub(crate) async fn list_jobs_handler(
    State(store): State<Arc<DatasetStore>>,
    Query(params): Query<JobQueryParams>,
) -> Result<Json<Vec<Job>>, AppError> {
    let JobQueryParams {
        search,
        category,
        status,
        job_type,
    } = params;

    let filter = JobFilter::from_params(search, category, status, job_type)?;
    Ok(Json(filter_jobs(store.all_jobs(), &filter)))
}

pub(crate) async fn active_jobs_handler(
    State(store): State<Arc<DatasetStore>>,
) -> Json<Vec<Job>> {
    Json(store.active_jobs())
}

pub(crate) async fn job_detail_handler(
    State(store): State<Arc<DatasetStore>>,
    Path(job_id): Path<Uuid>,
) -> Response {
    match store.job_by_id(&JobId(job_id)) {
        Some(job) => Json(job).into_response(),
        None => {
            let payload = json!({ "error": "job not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn job_applicants_handler(
    State(store): State<Arc<DatasetStore>>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<ApplicantQueryParams>,
) -> Result<Json<Vec<Applicant>>, AppError> {
    let ApplicantQueryParams { search, status } = params;
    let filter = ApplicantFilter::from_params(search, status)?;

    // Unknown job ids resolve to an empty set, same as the library surface.
    let applicants = store.applicants_for_job(&JobId(job_id));
    Ok(Json(filter_applicants(&applicants, &filter)))
}

pub(crate) async fn list_reports_handler(
    State(store): State<Arc<DatasetStore>>,
    Query(params): Query<ReportQueryParams>,
) -> Result<Json<Vec<Report>>, AppError> {
    let ReportQueryParams {
        search,
        status,
        report_type,
    } = params;

    let filter = ReportFilter::from_params(search, status, report_type)?;
    Ok(Json(filter_reports(store.all_reports(), &filter)))
}

pub(crate) async fn dashboard_handler(
    State(store): State<Arc<DatasetStore>>,
) -> Json<DashboardSummary> {
    Json(dashboard_summary(&store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetConfig;
    use crate::recruiting::sampler::Sampler;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> (Router, Arc<DatasetStore>) {
        let config = DatasetConfig {
            seed: Some(47),
            job_count: 12,
            report_count: 5,
        };
        let sampler = Sampler::with_seed(47)
            .anchored_at(Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap());
        let store = Arc::new(DatasetStore::generate_with(&config, sampler));
        (recruiting_router(store.clone()), store)
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&body).expect("json payload");
        (status, value)
    }

    #[tokio::test]
    async fn jobs_endpoint_lists_the_whole_collection() {
        let (router, store) = router();
        let (status, body) = send(router, "/api/v1/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("array").len(), store.all_jobs().len());
    }

    #[tokio::test]
    async fn jobs_endpoint_applies_status_filter() {
        let (router, store) = router();
        let (status, body) = send(router, "/api/v1/jobs?status=Published").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.as_array().expect("array").len(),
            store.active_jobs().len()
        );
    }

    #[tokio::test]
    async fn jobs_endpoint_rejects_unknown_status() {
        let (router, _) = router();
        let (status, body) = send(router, "/api/v1/jobs?status=archived").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("archived"));
    }

    #[tokio::test]
    async fn job_detail_distinguishes_missing_postings() {
        let (router, store) = router();
        let known = store.all_jobs()[0].id;

        let (status, body) = send(router.clone(), &format!("/api/v1/jobs/{known}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], serde_json::to_value(known).expect("id json"));

        let (status, _) = send(
            router,
            "/api/v1/jobs/00000000-0000-0000-0000-000000000000",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn applicants_for_unknown_job_return_empty_list() {
        let (router, _) = router();
        let (status, body) = send(
            router,
            "/api/v1/jobs/00000000-0000-0000-0000-000000000000/applicants",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().expect("array").is_empty());
    }

    #[tokio::test]
    async fn applicants_endpoint_matches_resolver_output() {
        let (router, store) = router();
        let job = store
            .all_jobs()
            .iter()
            .find(|job| job.applicants_count > 0)
            .expect("a posting with applicants")
            .clone();

        let (status, body) =
            send(router, &format!("/api/v1/jobs/{}/applicants", job.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.as_array().expect("array").len(),
            job.applicants_count as usize
        );
    }

    #[tokio::test]
    async fn dashboard_endpoint_reports_totals() {
        let (router, store) = router();
        let (status, body) = send(router, "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs"].as_u64(), Some(store.all_jobs().len() as u64));
        assert_eq!(
            body["total_applicants"].as_u64(),
            Some(u64::from(store.total_applicant_count()))
        );
        assert!(body["recent_applications"].as_array().expect("feed").len() <= 5);
    }

    #[tokio::test]
    async fn reports_endpoint_applies_type_filter() {
        let (router, store) = router();
        let (status, body) = send(router, "/api/v1/reports?type=Technical+Issue").await;
        assert_eq!(status, StatusCode::OK);
        let expected = store
            .all_reports()
            .iter()
            .filter(|report| {
                report.report_type == crate::recruiting::domain::ReportType::TechnicalIssue
            })
            .count();
        assert_eq!(body.as_array().expect("array").len(), expected);
    }
}
