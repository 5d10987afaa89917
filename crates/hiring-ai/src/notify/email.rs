//! Notification gateway contract plus the default logging adapter. Workflow
//! modules render their own HTML bodies; transports beyond logging live with
//! the deployment, behind [`NotificationGateway`].

use crate::config::NotificationConfig;
use tracing::info;

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub html_body: String,
}

/// Outcome of a delivery attempt. Skipped is the normal result when no
/// recipient is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryReceipt {
    Sent,
    Skipped { reason: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

pub trait NotificationGateway: Send + Sync {
    fn deliver(&self, message: EmailMessage) -> Result<DeliveryReceipt, NotifyError>;
}

/// Default gateway: records the notification in the service log. Stands in
/// for an SMTP adapter in environments without one; an unset recipient
/// disables delivery entirely.
#[derive(Debug, Clone, Default)]
pub struct LoggingMailer {
    recipient: Option<String>,
}

impl LoggingMailer {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            recipient: config.recipient.clone(),
        }
    }
}

impl NotificationGateway for LoggingMailer {
    fn deliver(&self, message: EmailMessage) -> Result<DeliveryReceipt, NotifyError> {
        let Some(recipient) = &self.recipient else {
            return Ok(DeliveryReceipt::Skipped {
                reason: "notification email not configured",
            });
        };

        info!(
            %recipient,
            subject = %message.subject,
            body_bytes = message.html_body.len(),
            "notification logged for delivery"
        );
        Ok(DeliveryReceipt::Sent)
    }
}

/// Minimal HTML escaping for values interpolated into notification bodies.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
