use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::decision::{recommend, DecisionInput};
use super::domain::{SectionId, EVALUATION_SCALE};
use super::flags::{GREEN_FLAGS, RED_FLAGS};
use super::sections::{question_templates, sections, templates_for};
use super::service::{EvaluationRequest, InterviewService};
use crate::notify::{NotificationGateway, SheetLedger};

/// Router builder exposing the scorecard structure, submission, and the
/// quick decision calculator.
pub fn interview_router<N, L>(service: Arc<InterviewService<N, L>>) -> Router
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    Router::new()
        .route("/api/v1/interview/form", get(form_handler))
        .route(
            "/api/v1/interview/templates/questions",
            get(templates_handler),
        )
        .route("/api/v1/interview/sections/:section_id", get(section_handler))
        .route("/api/v1/interview/scale", get(scale_handler))
        .route("/api/v1/interview/submit", post(submit_handler::<N, L>))
        .route(
            "/api/v1/interview/calculate-decision",
            post(calculate_decision_handler),
        )
        .with_state(service)
}

async fn form_handler() -> Response {
    let payload = json!({
        "success": true,
        "sections": sections(),
        "evaluationScale": EVALUATION_SCALE,
        "redFlags": RED_FLAGS,
        "greenFlags": GREEN_FLAGS,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn templates_handler() -> Response {
    let payload = json!({
        "success": true,
        "templates": question_templates(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn section_handler(Path(section_id): Path<String>) -> Response {
    match SectionId::parse(&section_id) {
        Some(section) => {
            let payload = json!({
                "success": true,
                "data": super::sections::section(section),
                "relatedQuestions": templates_for(section),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "success": false,
                "message": "Section not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

async fn scale_handler() -> Response {
    let payload = json!({
        "success": true,
        "scale": EVALUATION_SCALE,
        "redFlags": RED_FLAGS,
        "greenFlags": GREEN_FLAGS,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn submit_handler<N, L>(
    State(service): State<Arc<InterviewService<N, L>>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    match service.submit(request) {
        Ok(report) => {
            service.dispatch_outbound(&report);
            let payload = json!({
                "success": true,
                "message": "Evaluation submitted successfully",
                "report": report,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateDecisionRequest {
    #[serde(default)]
    overall_score: Option<f64>,
    #[serde(default)]
    red_flags: Vec<String>,
    #[serde(default)]
    green_flags: Vec<String>,
}

async fn calculate_decision_handler(
    axum::Json(request): axum::Json<CalculateDecisionRequest>,
) -> Response {
    let Some(overall_score) = request.overall_score else {
        let payload = json!({
            "success": false,
            "message": "Overall score is required",
        });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let input = DecisionInput {
        overall_score,
        red_flags: request.red_flags.len(),
        green_flags: request.green_flags.len(),
    };
    let decision = recommend(&input);

    let payload = json!({
        "success": true,
        "input": {
            "overallScore": overall_score,
            "redFlagsCount": input.red_flags,
            "greenFlagsCount": input.green_flags,
        },
        "decision": decision,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
