//! Integration specifications for the interviewer scorecard workflow:
//! section aggregation, the ordered decision rules, and the composed
//! evaluation report as external callers see them.

use std::sync::Arc;

use serde_json::json;

use hiring_ai::notify::LoggingMailer;
use hiring_ai::notify::{
    AppendReceipt, LedgerError, LedgerRecord, LedgerStatus, SheetLedger,
};
use hiring_ai::workflows::interview::{
    recommend, CandidateInfo, DecisionInput, DecisionSubmission, EvaluationRequest,
    EvaluationResponse, InterviewError, InterviewService, InterviewerInfo, RecommendationTier,
};

struct NullLedger;

impl SheetLedger for NullLedger {
    fn append(&self, _record: &LedgerRecord) -> Result<AppendReceipt, LedgerError> {
        Ok(AppendReceipt::Skipped {
            reason: "null ledger",
        })
    }

    fn status(&self) -> LedgerStatus {
        LedgerStatus {
            configured: false,
            detail: "null ledger".to_string(),
        }
    }
}

fn service() -> InterviewService<LoggingMailer, NullLedger> {
    InterviewService::new(Arc::new(LoggingMailer::default()), Arc::new(NullLedger))
}

fn rated(question_id: &str, value: u64) -> EvaluationResponse {
    EvaluationResponse {
        question_id: question_id.to_string(),
        value: Some(json!(value)),
    }
}

fn full_request() -> EvaluationRequest {
    EvaluationRequest {
        candidate_info: Some(CandidateInfo {
            name: "Jordan Avery".to_string(),
            position: Some("Family Support Specialist".to_string()),
        }),
        interviewer_info: Some(InterviewerInfo {
            name: "Sam Rivera".to_string(),
            email: None,
        }),
        responses: Some(vec![
            rated("OPN1", 3),
            rated("OPN2", 3),
            rated("OPN4", 2),
            rated("EXP1", 3),
            rated("EXP2", 2),
            rated("VAL1", 3),
            rated("VAL2", 3),
            rated("CLS1", 2),
        ]),
        decision: Some(DecisionSubmission {
            overall_score: Some(8.0),
            green_flags: vec![
                "GF1".to_string(),
                "GF3".to_string(),
                "GF4".to_string(),
                "GF5".to_string(),
            ],
            red_flags: vec!["RF1".to_string()],
            recommendation: None,
            rationale: Some("Consistent, specific, mission-aligned answers".to_string()),
            next_steps: None,
        }),
    }
}

#[test]
fn report_combines_sections_flags_and_calculated_recommendation() {
    let report = service().submit(full_request()).expect("report builds");

    assert_eq!(report.section_scores.len(), 4);
    let opening = &report.section_scores["OPENING"];
    assert_eq!(opening.average, 2.67);
    assert_eq!(opening.questions_answered, 3);

    // Eight ratings totaling 21: overall is item-level, not a mean of means.
    assert_eq!(report.overall_section_average, Some(2.63));
    assert_eq!(report.overall_section_rating, Some("Strong"));

    assert_eq!(
        report.calculated_recommendation.recommendation,
        RecommendationTier::StrongYes
    );
    assert_eq!(report.flags.green.len(), 4);
    assert_eq!(report.flags.red.len(), 1);
    // Engine suggested nothing for a strong yes, and the interviewer gave no
    // next steps either.
    assert!(report.next_steps.is_empty());
}

#[test]
fn interviewer_next_steps_take_precedence_over_engine_suggestions() {
    let mut request = full_request();
    if let Some(decision) = request.decision.as_mut() {
        decision.overall_score = Some(6.0);
        decision.green_flags.clear();
        decision.next_steps = Some(vec!["Schedule a working session".to_string()]);
    }

    let report = service().submit(request).expect("report builds");
    assert_eq!(
        report.calculated_recommendation.recommendation,
        RecommendationTier::Maybe
    );
    assert_eq!(report.next_steps, vec!["Schedule a working session"]);
}

#[test]
fn engine_suggestions_fill_in_when_the_interviewer_leaves_none() {
    let mut request = full_request();
    if let Some(decision) = request.decision.as_mut() {
        decision.overall_score = Some(6.0);
        decision.green_flags.clear();
    }

    let report = service().submit(request).expect("report builds");
    assert_eq!(
        report.next_steps,
        vec![
            "Complete reference checks",
            "Discuss with team",
            "Consider second interview",
        ]
    );
}

#[test]
fn validation_precedes_scoring() {
    let mut request = full_request();
    request.interviewer_info = None;
    let err = service().submit(request).expect_err("rejected");
    assert!(matches!(err, InterviewError::MissingInterviewer));

    let mut request = full_request();
    request.decision = None;
    let err = service().submit(request).expect_err("rejected");
    assert!(matches!(err, InterviewError::MissingDecisionScore));
}

#[test]
fn decision_rules_fire_in_order_and_totally() {
    // Rule one boundary from the strong side and just below it.
    assert_eq!(
        recommend(&DecisionInput {
            overall_score: 8.0,
            green_flags: 4,
            red_flags: 1
        })
        .recommendation,
        RecommendationTier::StrongYes
    );
    assert_eq!(
        recommend(&DecisionInput {
            overall_score: 7.9,
            green_flags: 4,
            red_flags: 1
        })
        .recommendation,
        RecommendationTier::Yes
    );

    // A gap in the table: moderate score with three red flags.
    let fall_through = recommend(&DecisionInput {
        overall_score: 6.5,
        green_flags: 0,
        red_flags: 3,
    });
    assert_eq!(fall_through.recommendation, RecommendationTier::Maybe);
    assert_eq!(
        fall_through.rationale,
        "Mixed results - additional evaluation needed"
    );

    // Heavy red flags force a no even above the maybe threshold.
    assert_eq!(
        recommend(&DecisionInput {
            overall_score: 6.5,
            green_flags: 0,
            red_flags: 4
        })
        .recommendation,
        RecommendationTier::No
    );
}
