//! Outbound collaborators: the notification mailer and the spreadsheet
//! ledger. Both sit behind traits so workflows stay testable, and both are
//! invoked fire-and-forget: a delivery is attempted at most once, failures
//! are logged and never surface to the caller.

pub mod email;
pub mod ledger;

use std::sync::Arc;

use tracing::{debug, info, warn};

pub use email::{DeliveryReceipt, EmailMessage, LoggingMailer, NotificationGateway, NotifyError};
pub use ledger::{AppendReceipt, CsvLedger, LedgerError, LedgerRecord, LedgerStatus, SheetLedger, SheetName};

/// Deliver a notification without blocking the caller.
pub fn notify_async<N: NotificationGateway + 'static>(gateway: Arc<N>, message: EmailMessage) {
    tokio::spawn(async move {
        deliver_notification(gateway.as_ref(), message);
    });
}

/// Append a ledger row without blocking the caller.
pub fn record_async<L: SheetLedger + 'static>(ledger: Arc<L>, record: LedgerRecord) {
    tokio::spawn(async move {
        record_row(ledger.as_ref(), &record);
    });
}

pub(crate) fn deliver_notification(gateway: &dyn NotificationGateway, message: EmailMessage) {
    let subject = message.subject.clone();
    match gateway.deliver(message) {
        Ok(DeliveryReceipt::Sent) => debug!(%subject, "notification delivered"),
        Ok(DeliveryReceipt::Skipped { reason }) => {
            info!(%subject, reason, "notification skipped")
        }
        Err(err) => warn!(%subject, error = %err, "notification delivery failed"),
    }
}

pub(crate) fn record_row(ledger: &dyn SheetLedger, record: &LedgerRecord) {
    match ledger.append(record) {
        Ok(AppendReceipt::Recorded) => debug!(sheet = record.sheet.title(), "ledger row appended"),
        Ok(AppendReceipt::Skipped { reason }) => {
            info!(sheet = record.sheet.title(), reason, "ledger append skipped")
        }
        Err(err) => warn!(
            sheet = record.sheet.title(),
            error = %err,
            "ledger append failed"
        ),
    }
}
