use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::classifier::AssessmentError;
use super::domain::Color;
use super::questions;
use super::service::{AssessmentService, AssessmentSubmission};
use crate::notify::{NotificationGateway, SheetLedger};

/// Router builder exposing the assessment catalog and submission endpoints.
pub fn assessment_router<N, L>(service: Arc<AssessmentService<N, L>>) -> Router
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/colors", get(colors_handler))
        .route("/api/v1/assessment/colors/:color_id", get(color_detail_handler))
        .route("/api/v1/assessment/submit", post(submit_handler::<N, L>))
        .with_state(service)
}

async fn questions_handler() -> Response {
    let colors: Vec<_> = Color::ALL
        .iter()
        .map(|color| {
            let profile = color.profile();
            json!({
                "id": profile.id,
                "name": profile.name,
                "color": profile.color,
                "tagline": profile.tagline,
            })
        })
        .collect();

    let payload = json!({
        "success": true,
        "totalQuestions": questions::expected_question_count(),
        "colors": colors,
        "questions": questions::questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn colors_handler() -> Response {
    let data: Vec<_> = Color::ALL
        .iter()
        .map(|color| {
            let profile = color.profile();
            json!({
                "id": profile.id,
                "name": profile.name,
                "color": profile.color,
                "tagline": profile.tagline,
                "description": profile.description,
                "coreValues": profile.core_values,
                "strengths": profile.strengths,
            })
        })
        .collect();

    (StatusCode::OK, axum::Json(json!({ "success": true, "data": data }))).into_response()
}

async fn color_detail_handler(Path(color_id): Path<String>) -> Response {
    match Color::parse(&color_id) {
        Some(color) => {
            (StatusCode::OK, axum::Json(json!({ "success": true, "data": color.profile() })))
                .into_response()
        }
        None => {
            let payload = json!({
                "success": false,
                "message": "Color not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

async fn submit_handler<N, L>(
    State(service): State<Arc<AssessmentService<N, L>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    match service.submit(submission) {
        Ok(result) => {
            service.dispatch_outbound(&result);
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(err @ AssessmentError::MissingResponses) => {
            let payload = json!({
                "success": false,
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(err @ AssessmentError::IncompleteSubmission { .. }) => {
            let payload = json!({
                "success": false,
                "message": "Incomplete assessment. Please answer at least 75% of questions.",
                "detail": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(err) => {
            error!(error = %err, "assessment scoring violated an internal invariant");
            let payload = json!({
                "success": false,
                "message": "Internal scoring error",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
