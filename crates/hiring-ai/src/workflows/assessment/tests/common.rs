use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::notify::{
    AppendReceipt, DeliveryReceipt, EmailMessage, LedgerError, LedgerRecord, LedgerStatus,
    NotificationGateway, NotifyError, SheetLedger,
};
use crate::workflows::assessment::domain::{Color, SubmittedAnswer};
use crate::workflows::assessment::service::{AssessmentService, AssessmentSubmission};

/// Build answers with the given per-color counts (declaration order), ids
/// assigned Q1, Q2, ... in submission order.
pub(super) fn answers(counts: [usize; 4]) -> Vec<SubmittedAnswer> {
    let mut result = Vec::new();
    let mut question = 1;
    for (color, count) in Color::ALL.iter().zip(counts) {
        for _ in 0..count {
            result.push(SubmittedAnswer {
                question_id: format!("Q{question}"),
                color: color.id().to_string(),
            });
            question += 1;
        }
    }
    result
}

pub(super) fn submission(counts: [usize; 4]) -> AssessmentSubmission {
    AssessmentSubmission {
        candidate_name: Some("Jordan Avery".to_string()),
        candidate_email: Some("jordan@example.org".to_string()),
        responses: Some(answers(counts)),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMailer {
    messages: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MemoryMailer {
    pub(super) fn messages(&self) -> Vec<EmailMessage> {
        self.messages.lock().expect("mailer mutex poisoned").clone()
    }
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

impl MemoryLedger {
    pub(super) fn rows(&self) -> Vec<LedgerRecord> {
        self.rows.lock().expect("ledger mutex poisoned").clone()
    }
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

pub(super) fn build_service() -> (
    AssessmentService<MemoryMailer, MemoryLedger>,
    Arc<MemoryMailer>,
    Arc<MemoryLedger>,
) {
    let mailer = Arc::new(MemoryMailer::default());
    let ledger = Arc::new(MemoryLedger::default());
    let service = AssessmentService::new(mailer.clone(), ledger.clone());
    (service, mailer, ledger)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
