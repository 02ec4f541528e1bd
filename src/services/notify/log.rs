use async_trait::async_trait;

use super::{Notification, NotificationRelay};

/// Used when no relay access key is configured: the booking is only logged.
pub struct LogRelay;

#[async_trait]
impl NotificationRelay for LogRelay {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        tracing::info!(
            subject = %notification.subject,
            date = %notification.date,
            time = %notification.time,
            "relay disabled, notification not sent:\n{}",
            notification.message
        );
        Ok(())
    }
}
