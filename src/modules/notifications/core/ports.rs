// Port for the device notification service.

use crate::shared::application::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Returns `false` when the user or the device refuses notifications.
    async fn request_permissions(&self) -> Result<bool, RepositoryError>;

    async fn register_device_token(&self, user_id: &str, token: &str)
    -> Result<(), RepositoryError>;

    /// Returns the identifier assigned by the notification service.
    async fn schedule_local_notification(
        &self,
        title: &str,
        body: &str,
        date: DateTime<Utc>,
        data: Option<serde_json::Value>,
    ) -> Result<String, RepositoryError>;

    async fn cancel_notification(&self, notification_id: &str) -> Result<(), RepositoryError>;
}
