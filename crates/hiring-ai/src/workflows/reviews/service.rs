use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::notify::email::escape_html;
use crate::notify::{DeliveryReceipt, EmailMessage, NotificationGateway};

/// Performance review submission. Core identity fields are typed; the rest
/// of the form (per-criterion ratings, narrative sections) rides along
/// untyped and is echoed into the notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub review_date: Option<String>,
    #[serde(default)]
    pub supervisor: Option<String>,
    #[serde(default)]
    pub review_type: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Missing required fields: employeeName, reviewDate, supervisor, reviewType")]
    MissingRequiredFields,
}

/// What the caller gets back: the assigned id plus whether the notification
/// actually went out. A failed or skipped email never fails the submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReceipt {
    pub success: bool,
    pub review_id: String,
    pub email_sent: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

static REVIEW_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_review_id() -> String {
    let seq = REVIEW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("REV-{}-{seq:04}", Utc::now().timestamp_millis())
}

pub struct ReviewService<N> {
    mailer: Arc<N>,
}

impl<N> ReviewService<N>
where
    N: NotificationGateway + 'static,
{
    pub fn new(mailer: Arc<N>) -> Self {
        Self { mailer }
    }

    /// Validate, assign an id, and send the notification. Unlike the scoring
    /// flows this one reports delivery in its response, so it waits for the
    /// gateway instead of spawning.
    pub fn submit(&self, submission: ReviewSubmission) -> Result<ReviewReceipt, ReviewError> {
        let complete = [
            &submission.employee_name,
            &submission.review_date,
            &submission.supervisor,
            &submission.review_type,
        ]
        .iter()
        .all(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()));

        if !complete {
            return Err(ReviewError::MissingRequiredFields);
        }

        let review_id = next_review_id();
        let email_sent = match self
            .mailer
            .deliver(render_notification(&submission, &review_id))
        {
            Ok(DeliveryReceipt::Sent) => true,
            Ok(DeliveryReceipt::Skipped { reason }) => {
                tracing::info!(reason, "review notification skipped");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "review notification failed");
                false
            }
        };

        Ok(ReviewReceipt {
            success: true,
            review_id,
            email_sent,
            message: if email_sent {
                "Review submitted and email sent successfully"
            } else {
                "Review submitted but email not sent (check email configuration)"
            },
            submitted_at: submission.submitted_at,
        })
    }
}

fn render_notification(submission: &ReviewSubmission, review_id: &str) -> EmailMessage {
    let employee = submission.employee_name.as_deref().unwrap_or_default();

    let mut body = String::new();
    writeln!(body, "<h1>Employee Review Submitted</h1>").expect("write heading");
    writeln!(
        body,
        "<p><strong>Review ID:</strong> {}</p>",
        escape_html(review_id)
    )
    .expect("write id");
    writeln!(
        body,
        "<p><strong>Employee:</strong> {}</p>",
        escape_html(employee)
    )
    .expect("write employee");
    writeln!(
        body,
        "<p><strong>Supervisor:</strong> {}</p>",
        escape_html(submission.supervisor.as_deref().unwrap_or_default())
    )
    .expect("write supervisor");
    writeln!(
        body,
        "<p><strong>Review Type:</strong> {} ({})</p>",
        escape_html(submission.review_type.as_deref().unwrap_or_default()),
        escape_html(submission.review_date.as_deref().unwrap_or_default())
    )
    .expect("write type");

    if !submission.details.is_empty() {
        writeln!(body, "<h2>Details</h2><ul>").expect("write details heading");
        for (key, value) in &submission.details {
            writeln!(
                body,
                "<li><strong>{}</strong>: {}</li>",
                escape_html(key),
                escape_html(&value.to_string())
            )
            .expect("write detail");
        }
        body.push_str("</ul>");
    }

    EmailMessage {
        subject: format!("Employee Review: {employee}"),
        html_body: body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::notify::LoggingMailer;
    use serde_json::json;

    fn submission() -> ReviewSubmission {
        ReviewSubmission {
            employee_name: Some("Casey Morgan".to_string()),
            review_date: Some("2026-07-01".to_string()),
            supervisor: Some("Sam Rivera".to_string()),
            review_type: Some("12-month".to_string()),
            submitted_at: Some("2026-07-01T15:30:00Z".to_string()),
            details: BTreeMap::from([(
                "ratings".to_string(),
                json!({ "performance": 4, "relationship": 5 }),
            )]),
        }
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let service = ReviewService::new(Arc::new(LoggingMailer::default()));
        let mut incomplete = submission();
        incomplete.supervisor = None;

        let err = service.submit(incomplete).expect_err("rejected");
        assert!(matches!(err, ReviewError::MissingRequiredFields));
    }

    #[test]
    fn unconfigured_mailer_still_accepts_the_review() {
        let service = ReviewService::new(Arc::new(LoggingMailer::default()));
        let receipt = service.submit(submission()).expect("accepted");

        assert!(receipt.success);
        assert!(!receipt.email_sent);
        assert!(receipt.review_id.starts_with("REV-"));
        assert_eq!(receipt.submitted_at.as_deref(), Some("2026-07-01T15:30:00Z"));
    }

    #[test]
    fn configured_mailer_reports_email_sent() {
        let mailer = LoggingMailer::new(&NotificationConfig {
            recipient: Some("hiring@example.org".to_string()),
        });
        let service = ReviewService::new(Arc::new(mailer));
        let receipt = service.submit(submission()).expect("accepted");

        assert!(receipt.email_sent);
        assert_eq!(
            receipt.message,
            "Review submitted and email sent successfully"
        );
    }

    #[test]
    fn review_ids_are_unique_across_submissions() {
        let service = ReviewService::new(Arc::new(LoggingMailer::default()));
        let first = service.submit(submission()).expect("accepted");
        let second = service.submit(submission()).expect("accepted");
        assert_ne!(first.review_id, second.review_id);
    }
}
