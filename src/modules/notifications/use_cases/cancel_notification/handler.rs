use crate::modules::notifications::core::ports::NotificationRepository;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct CancelNotificationHandler<TNotifications>
where
    TNotifications: NotificationRepository + 'static,
{
    notifications: Arc<TNotifications>,
}

impl<TNotifications> CancelNotificationHandler<TNotifications>
where
    TNotifications: NotificationRepository + 'static,
{
    pub fn new(notifications: Arc<TNotifications>) -> Self {
        Self { notifications }
    }

    pub async fn handle(&self, notification_id: &str) -> Result<(), ApplicationError> {
        self.notifications.cancel_notification(notification_id).await?;
        tracing::info!(notification_id, "reminder cancelled");
        Ok(())
    }
}
