//! Integration specifications for the personality assessment workflow.
//!
//! Scenarios exercise the public service facade and HTTP router end to end:
//! completeness gating, ranking determinism, and the dual candidate/
//! interviewer report shapes.

mod common {
    use std::sync::{Arc, Mutex};

    use hiring_ai::notify::{
        AppendReceipt, DeliveryReceipt, EmailMessage, LedgerError, LedgerRecord, LedgerStatus,
        NotificationGateway, NotifyError, SheetLedger,
    };
    use hiring_ai::workflows::assessment::{
        AssessmentService, AssessmentSubmission, Color, SubmittedAnswer,
    };

    #[derive(Default, Clone)]
    pub struct RecordingMailer {
        messages: Arc<Mutex<Vec<EmailMessage>>>,
    }

    impl NotificationGateway for RecordingMailer {
        fn deliver(&self, message: EmailMessage) -> Result<DeliveryReceipt, NotifyError> {
            self.messages
                .lock()
                .expect("mailer mutex poisoned")
                .push(message);
            Ok(DeliveryReceipt::Sent)
        }
    }

    #[derive(Default, Clone)]
    pub struct RecordingLedger {
        rows: Arc<Mutex<Vec<LedgerRecord>>>,
    }

    impl SheetLedger for RecordingLedger {
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
                detail: "recording ledger".to_string(),
            }
        }
    }

    pub fn service() -> AssessmentService<RecordingMailer, RecordingLedger> {
        AssessmentService::new(
            Arc::new(RecordingMailer::default()),
            Arc::new(RecordingLedger::default()),
        )
    }

    pub fn answers(counts: [usize; 4]) -> Vec<SubmittedAnswer> {
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

    pub fn submission(counts: [usize; 4]) -> AssessmentSubmission {
        AssessmentSubmission {
            candidate_name: Some("Jordan Avery".to_string()),
            candidate_email: Some("jordan@example.org".to_string()),
            responses: Some(answers(counts)),
        }
    }
}

use common::*;
use hiring_ai::workflows::assessment::{classify, AssessmentError, Color};

#[test]
fn even_four_way_split_promotes_the_first_declared_color() {
    let result = service().submit(submission([5, 5, 5, 5])).expect("scored");

    let candidate = &result.candidate_results;
    assert_eq!(candidate.primary_color.name, "Gold");
    assert_eq!(candidate.primary_color.percentage, 25);
    assert_eq!(candidate.secondary_color.name, "Green");

    let spectrum: Vec<&str> = candidate
        .color_spectrum
        .iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(spectrum, ["Gold", "Green", "Orange", "Blue"]);
}

#[test]
fn three_quarter_boundary_is_exact() {
    assert!(service().submit(submission([15, 0, 0, 0])).is_ok());

    let err = service()
        .submit(submission([14, 0, 0, 0]))
        .expect_err("one answer short");
    assert!(matches!(
        err,
        AssessmentError::IncompleteSubmission {
            valid: 14,
            required: 15,
            expected: 20,
        }
    ));
}

#[test]
fn reports_agree_on_counts_and_percentages() {
    let result = service().submit(submission([9, 6, 3, 2])).expect("scored");

    let interviewer = &result.interviewer_report;
    assert_eq!(result.responses_received, 20);

    let total: usize = interviewer
        .color_profile
        .iter()
        .map(|entry| entry.count)
        .sum();
    assert_eq!(total, 20);

    assert_eq!(interviewer.summary.primary_color, "Gold");
    assert_eq!(interviewer.summary.primary_percentage, 45);
    assert_eq!(
        interviewer.summary.primary_percentage,
        result.candidate_results.primary_color.percentage
    );
    assert_eq!(interviewer.primary_details.core_values[0], "Responsibility");
    assert!(!interviewer.family_services_profile.strengths.is_empty());
}

#[test]
fn classifier_is_pure_over_its_inputs() {
    let responses = answers([7, 6, 4, 3]);
    let first = classify(&responses, 20).expect("accepted");
    let second = classify(&responses, 20).expect("accepted");

    assert_eq!(first, second);
    assert_eq!(first.ranking.primary().color, Color::Gold);
}
