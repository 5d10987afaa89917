use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use super::common::*;
use crate::workflows::interview::router::interview_router;

fn router() -> axum::Router {
    interview_router(Arc::new(build_service()))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn post_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn form_returns_sections_and_flag_catalogs() {
    let response = router()
        .oneshot(get_request("/api/v1/interview/form"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["sections"].as_array().expect("sections").len(), 5);
    assert_eq!(body["redFlags"].as_array().expect("red flags").len(), 10);
    assert_eq!(body["greenFlags"].as_array().expect("green flags").len(), 10);
    assert_eq!(body["evaluationScale"][0]["label"], json!("Strong"));
}

#[tokio::test]
async fn unknown_section_is_404() {
    let response = router()
        .oneshot(get_request("/api/v1/interview/sections/benefits"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn section_lookup_includes_related_templates() {
    let response = router()
        .oneshot(get_request("/api/v1/interview/sections/values"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["name"], json!("Values & Alignment"));
    assert_eq!(
        body["relatedQuestions"].as_array().expect("templates").len(),
        10
    );
}

#[tokio::test]
async fn submission_without_candidate_info_is_rejected() {
    let response = router()
        .oneshot(post_request(
            "/api/v1/interview/submit",
            json!({
                "interviewerInfo": { "name": "Sam Rivera" },
                "responses": [],
                "decision": { "overallScore": 7 },
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], json!("Candidate information is required"));
}

#[tokio::test]
async fn submission_without_score_is_rejected() {
    let response = router()
        .oneshot(post_request(
            "/api/v1/interview/submit",
            json!({
                "candidateInfo": { "name": "Jordan Avery" },
                "interviewerInfo": { "name": "Sam Rivera" },
                "responses": [],
                "decision": { "greenFlags": ["GF1"] },
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body["message"],
        json!("Decision with overall score is required")
    );
}

#[tokio::test]
async fn full_submission_returns_the_report() {
    let response = router()
        .oneshot(post_request(
            "/api/v1/interview/submit",
            json!({
                "candidateInfo": { "name": "Jordan Avery", "position": "Family Support Specialist" },
                "interviewerInfo": { "name": "Sam Rivera" },
                "responses": [
                    { "questionId": "OPN1", "value": 3 },
                    { "questionId": "OPN2", "value": 2 },
                    { "questionId": "OPN3", "value": "Composed and warm" },
                    { "questionId": "VAL1", "value": 3 },
                ],
                "decision": {
                    "overallScore": 7.5,
                    "greenFlags": ["GF1", "GF3", "GF4"],
                    "redFlags": ["RF2"],
                    "recommendation": "yes",
                    "rationale": "Strong alignment with the mission",
                },
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["success"], json!(true));
    let report = &body["report"];
    assert_eq!(report["interviewScore"], json!(7.5));
    assert_eq!(report["sectionScores"]["OPENING"]["questionsAnswered"], json!(2));
    assert_eq!(report["sectionScores"]["VALUES"]["rating"], json!("Strong"));
    assert_eq!(
        report["calculatedRecommendation"]["recommendation"],
        json!("YES")
    );
    assert_eq!(report["interviewerRecommendation"], json!("yes"));
    assert_eq!(report["flags"]["green"].as_array().expect("greens").len(), 3);
}

#[tokio::test]
async fn decision_calculator_requires_a_score() {
    let response = router()
        .oneshot(post_request(
            "/api/v1/interview/calculate-decision",
            json!({ "greenFlags": ["GF1"] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn decision_calculator_reports_inputs_and_outcome() {
    let response = router()
        .oneshot(post_request(
            "/api/v1/interview/calculate-decision",
            json!({
                "overallScore": 8,
                "greenFlags": ["GF1", "GF2", "GF3", "GF4"],
                "redFlags": ["RF1"],
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["input"]["greenFlagsCount"], json!(4));
    assert_eq!(body["decision"]["recommendation"], json!("STRONG YES"));
    assert_eq!(body["decision"]["confidence"], json!("high"));
}
