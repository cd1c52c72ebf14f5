use crate::infra::{range_violations, AppState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use vital_insights::error::AppError;
use vital_insights::survey::{generate, Report, StoreError, SurveyAnswers, SurveyId, SurveyStore};

#[derive(Debug, Serialize)]
pub(crate) struct SurveyResponse {
    pub(crate) id: SurveyId,
    pub(crate) results: Report,
}

pub(crate) fn survey_router<S>(store: Arc<S>) -> axum::Router
where
    S: SurveyStore + 'static,
{
    axum::Router::new()
        .route("/api/survey", axum::routing::post(submit_survey::<S>))
        .route(
            "/api/results/:survey_id",
            axum::routing::get(fetch_results::<S>),
        )
        .with_state(store)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Accepts one questionnaire, generates the report and stores the pair.
/// Out-of-range answers are rejected with a 422 listing every violation.
pub(crate) async fn submit_survey<S>(
    State(store): State<Arc<S>>,
    Json(answers): Json<SurveyAnswers>,
) -> Result<Response, AppError>
where
    S: SurveyStore,
{
    let violations = range_violations(&answers);
    if !violations.is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": violations })),
        )
            .into_response());
    }

    let report = generate(&answers, Utc::now());
    let record = store.save(answers, report)?;

    Ok(Json(SurveyResponse {
        id: record.id,
        results: record.report,
    })
    .into_response())
}

pub(crate) async fn fetch_results<S>(
    State(store): State<Arc<S>>,
    Path(survey_id): Path<String>,
) -> Result<Response, AppError>
where
    S: SurveyStore,
{
    let id = SurveyId(survey_id);
    match store.fetch(&id)? {
        Some(record) => Ok(Json(record).into_response()),
        None => Err(AppError::Store(StoreError::NotFound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySurveyStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn submission() -> serde_json::Value {
        json!({
            "name": "Ivan",
            "age": 30,
            "activity_level": "medium",
            "goal": "health",
            "workouts_per_week": 3,
            "sleep_hours": 7.5,
            "stress_level": 5,
            "water_liters": 2.0,
            "fastfood_frequency": "rarely",
            "smokes": false
        })
    }

    fn post_survey(payload: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/survey")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn submission_returns_id_and_results() {
        let router = survey_router(Arc::new(InMemorySurveyStore::default()));
        let response = router
            .oneshot(post_survey(&submission()))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["id"].as_str().is_some());
        assert_eq!(body["results"]["version"], "insights.v2");
        assert_eq!(body["results"]["gauges"]["health_index"], 79);
    }

    #[tokio::test]
    async fn out_of_range_answers_get_a_422_with_details() {
        let mut payload = submission();
        payload["age"] = json!(17);
        payload["stress_level"] = json!(11);

        let router = survey_router(Arc::new(InMemorySurveyStore::default()));
        let response = router
            .oneshot(post_survey(&payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn stored_results_can_be_fetched_back() {
        let store = Arc::new(InMemorySurveyStore::default());
        let router = survey_router(store.clone());
        let response = router
            .clone()
            .oneshot(post_survey(&submission()))
            .await
            .expect("router responds");
        let body = body_json(response).await;
        let id = body["id"].as_str().expect("id present").to_owned();

        let request = Request::builder()
            .uri(format!("/api/results/{id}"))
            .body(Body::empty())
            .expect("request builds");
        let response = router.oneshot(request).await.expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let record = body_json(response).await;
        assert_eq!(record["id"], id.as_str());
        assert_eq!(record["answers"]["name"], "Ivan");
        assert_eq!(record["report"]["user"]["name"], "Ivan");
    }

    #[tokio::test]
    async fn unknown_id_is_a_404() {
        let router = survey_router(Arc::new(InMemorySurveyStore::default()));
        let request = Request::builder()
            .uri("/api/results/missing")
            .body(Body::empty())
            .expect("request builds");
        let response = router.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
