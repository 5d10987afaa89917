use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::infra::AppState;
use hiring_ai::notify::{NotificationGateway, SheetLedger};
use hiring_ai::workflows::assessment::{assessment_router, AssessmentService};
use hiring_ai::workflows::interview::{interview_router, InterviewService};
use hiring_ai::workflows::reviews::{review_router, ReviewService};
use hiring_ai::workflows::scenarios::{scenario_router, ScenarioService};

/// All workflow routers merged with the operational endpoints.
pub(crate) fn application_routes<N, L>(mailer: Arc<N>, ledger: Arc<L>) -> axum::Router
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    let assessment = Arc::new(AssessmentService::new(mailer.clone(), ledger.clone()));
    let interview = Arc::new(InterviewService::new(mailer.clone(), ledger.clone()));
    let scenarios = Arc::new(ScenarioService::new(mailer.clone()));
    let reviews = Arc::new(ReviewService::new(mailer));

    assessment_router(assessment)
        .merge(interview_router(interview))
        .merge(scenario_router(scenarios))
        .merge(review_router(reviews))
        .merge(ledger_routes(ledger))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

fn ledger_routes<L>(ledger: Arc<L>) -> axum::Router
where
    L: SheetLedger + 'static,
{
    axum::Router::new()
        .route(
            "/api/v1/sheets/status",
            axum::routing::get(sheets_status_endpoint::<L>),
        )
        .with_state(ledger)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "system": "Hiring Workflow Assistant",
    }))
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

#[derive(Debug, Serialize)]
struct SheetsStatusResponse {
    success: bool,
    connected: bool,
    detail: String,
}

async fn sheets_status_endpoint<L>(
    axum::extract::State(ledger): axum::extract::State<Arc<L>>,
) -> Json<SheetsStatusResponse>
where
    L: SheetLedger + 'static,
{
    let status = ledger.status();
    Json(SheetsStatusResponse {
        success: true,
        connected: status.configured,
        detail: status.detail,
    })
}
