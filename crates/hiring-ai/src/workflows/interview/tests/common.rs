use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::notify::{
    AppendReceipt, DeliveryReceipt, EmailMessage, LedgerError, LedgerRecord, LedgerStatus,
    NotificationGateway, NotifyError, SheetLedger,
};
use crate::workflows::interview::domain::EvaluationResponse;
use crate::workflows::interview::report::{CandidateInfo, DecisionSubmission, InterviewerInfo};
use crate::workflows::interview::service::{EvaluationRequest, InterviewService};

pub(super) fn rated(question_id: &str, value: u64) -> EvaluationResponse {
    EvaluationResponse {
        question_id: question_id.to_string(),
        value: Some(json!(value)),
    }
}

pub(super) fn skipped(question_id: &str) -> EvaluationResponse {
    EvaluationResponse {
        question_id: question_id.to_string(),
        value: None,
    }
}

pub(super) fn decision(score: f64, green: usize, red: usize) -> DecisionSubmission {
    DecisionSubmission {
        overall_score: Some(score),
        green_flags: (1..=green).map(|i| format!("GF{i}")).collect(),
        red_flags: (1..=red).map(|i| format!("RF{i}")).collect(),
        recommendation: None,
        rationale: Some("Solid interview overall".to_string()),
        next_steps: None,
    }
}

pub(super) fn request(
    responses: Vec<EvaluationResponse>,
    decision: DecisionSubmission,
) -> EvaluationRequest {
    EvaluationRequest {
        candidate_info: Some(CandidateInfo {
            name: "Jordan Avery".to_string(),
            position: Some("Family Support Specialist".to_string()),
        }),
        interviewer_info: Some(InterviewerInfo {
            name: "Sam Rivera".to_string(),
            email: None,
        }),
        responses: Some(responses),
        decision: Some(decision),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMailer {
    messages: Arc<Mutex<Vec<EmailMessage>>>,
}

impl NotificationGateway for MemoryMailer {
    fn deliver(&self, message: EmailMessage) -> Result<DeliveryReceipt, NotifyError> {
        self.messages
            .lock()
            .expect("mailer mutex poisoned")
            .push(message);
        Ok(DeliveryReceipt::Sent)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLedger {
    rows: Arc<Mutex<Vec<LedgerRecord>>>,
}

impl SheetLedger for MemoryLedger {
    fn append(&self, record: &LedgerRecord) -> Result<AppendReceipt, LedgerError> {
        self.rows
            .lock()
            .expect("ledger mutex poisoned")
            .push(record.clone());
        Ok(AppendReceipt::Recorded)
    }

    fn status(&self) -> LedgerStatus {
        LedgerStatus {
            configured: true,
            detail: "in-memory ledger".to_string(),
        }
    }
}

pub(super) fn build_service() -> InterviewService<MemoryMailer, MemoryLedger> {
    InterviewService::new(
        Arc::new(MemoryMailer::default()),
        Arc::new(MemoryLedger::default()),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
