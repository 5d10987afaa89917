use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::{scenario, scenarios, ASSESSMENT_CATEGORIES, SCORING_RUBRIC};
use super::scoring::{
    score_submission, ScenarioScoreRequest, ScenarioService, ScenarioSubmission,
};
use crate::notify::NotificationGateway;

pub fn scenario_router<N>(service: Arc<ScenarioService<N>>) -> Router
where
    N: NotificationGateway + 'static,
{
    Router::new()
        .route("/api/v1/scenarios", get(list_handler))
        .route("/api/v1/scenarios/all", get(catalog_handler))
        .route("/api/v1/scenarios/scoring/rubric", get(rubric_handler))
        .route("/api/v1/scenarios/:scenario_id", get(detail_handler))
        .route("/api/v1/scenarios/submit", post(submit_handler::<N>))
        .route("/api/v1/scenarios/score", post(score_handler))
        .with_state(service)
}

async fn list_handler() -> Response {
    let listing: Vec<_> = scenarios()
        .iter()
        .map(|scenario| {
            json!({
                "id": scenario.id,
                "title": scenario.title,
                "category": scenario.category,
                "difficulty": scenario.difficulty,
            })
        })
        .collect();

    (StatusCode::OK, axum::Json(json!({ "success": true, "scenarios": listing })))
        .into_response()
}

async fn catalog_handler() -> Response {
    let payload = json!({
        "success": true,
        "count": scenarios().len(),
        "instructions": "Please read each scenario carefully and provide thoughtful, detailed responses. There are no \"right\" answers - we want to understand how you think through complex situations.",
        "estimatedTime": "45-60 minutes",
        "scenarios": scenarios(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn rubric_handler() -> Response {
    let rubric: serde_json::Map<String, serde_json::Value> = SCORING_RUBRIC
        .iter()
        .map(|(value, level)| (value.to_string(), json!(level)))
        .collect();

    let criteria: Vec<_> = scenarios()
        .iter()
        .map(|scenario| {
            json!({
                "id": scenario.id,
                "title": scenario.title,
                "scoringCriteria": scenario.scoring_criteria,
            })
        })
        .collect();

    let payload = json!({
        "success": true,
        "rubric": rubric,
        "categories": ASSESSMENT_CATEGORIES,
        "scenarios": criteria,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn detail_handler(Path(scenario_id): Path<String>) -> Response {
    match scenario(&scenario_id) {
        Some(found) => {
            (StatusCode::OK, axum::Json(json!({ "success": true, "data": found })))
                .into_response()
        }
        None => {
            let payload = json!({
                "success": false,
                "message": "Scenario not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

async fn submit_handler<N>(
    State(service): State<Arc<ScenarioService<N>>>,
    axum::Json(submission): axum::Json<ScenarioSubmission>,
) -> Response
where
    N: NotificationGateway + 'static,
{
    match service.submit(submission) {
        Ok(result) => {
            service.dispatch_outbound(&result);
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "success": false,
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

async fn score_handler(axum::Json(request): axum::Json<ScenarioScoreRequest>) -> Response {
    match score_submission(request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => {
            let payload = json!({
                "success": false,
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use crate::notify::LoggingMailer;

    fn router() -> Router {
        scenario_router(Arc::new(ScenarioService::new(Arc::new(
            LoggingMailer::default(),
        ))))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn catalog_serves_all_scenarios_with_questions() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/scenarios/all")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], json!(6));
        assert_eq!(body["scenarios"][0]["questions"].as_array().expect("questions").len(), 5);
        // Candidate-facing payload never includes the scoring criteria.
        assert!(body["scenarios"][0].get("scoringCriteria").is_none());
    }

    #[tokio::test]
    async fn unknown_scenario_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/scenarios/SC9")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rubric_is_keyed_by_scale_value() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/scenarios/scoring/rubric")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let body = body_json(response).await;
        assert_eq!(body["rubric"]["3"]["label"], json!("Strong"));
        assert_eq!(body["categories"].as_array().expect("categories").len(), 7);
    }

    #[tokio::test]
    async fn submission_without_name_is_rejected() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scenarios/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({ "responses": [{ "questionId": "SC1_Q1", "response": "..." }] })
                            .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], json!("Candidate name is required"));
    }
}
