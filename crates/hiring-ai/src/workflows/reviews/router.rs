use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::{BONUS_TIERS, RATING_SCALE, REVIEW_CATEGORIES, REVIEW_TYPES};
use super::service::{ReviewService, ReviewSubmission};
use crate::notify::NotificationGateway;

pub fn review_router<N>(service: Arc<ReviewService<N>>) -> Router
where
    N: NotificationGateway + 'static,
{
    Router::new()
        .route("/api/v1/reviews/submit", post(submit_handler::<N>))
        .route("/api/v1/reviews/config", get(config_handler))
        .with_state(service)
}

async fn submit_handler<N>(
    State(service): State<Arc<ReviewService<N>>>,
    axum::Json(submission): axum::Json<ReviewSubmission>,
) -> Response
where
    N: NotificationGateway + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(err) => {
            let payload = json!({
                "success": false,
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

async fn config_handler() -> Response {
    let payload = json!({
        "success": true,
        "config": {
            "categories": REVIEW_CATEGORIES,
            "ratingScale": RATING_SCALE,
            "reviewTypes": REVIEW_TYPES,
            "bonusTiers": BONUS_TIERS,
        },
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::notify::LoggingMailer;

    fn router() -> Router {
        review_router(Arc::new(ReviewService::new(Arc::new(
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
    async fn config_lists_categories_and_bonus_tiers() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reviews/config")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["config"]["categories"].as_array().expect("categories").len(), 3);
        assert_eq!(body["config"]["ratingScale"][0]["value"], json!(5));
        assert_eq!(body["config"]["bonusTiers"][0]["amount"], json!("$100"));
        assert_eq!(body["config"]["reviewTypes"][1]["bonusEligible"], json!(true));
    }

    #[tokio::test]
    async fn submit_rejects_incomplete_reviews() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/reviews/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({ "employeeName": "Casey Morgan" }).to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            json!("Missing required fields: employeeName, reviewDate, supervisor, reviewType")
        );
    }

    #[tokio::test]
    async fn submit_returns_receipt_with_review_id() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/reviews/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({
                            "employeeName": "Casey Morgan",
                            "reviewDate": "2026-07-01",
                            "supervisor": "Sam Rivera",
                            "reviewType": "annual",
                        })
                        .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert!(body["reviewId"]
            .as_str()
            .expect("review id")
            .starts_with("REV-"));
        assert_eq!(body["emailSent"], json!(false));
    }
}
