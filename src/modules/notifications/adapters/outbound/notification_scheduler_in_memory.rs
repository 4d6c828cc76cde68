// In memory implementation of the NotificationRepository port.
//
// Responsibilities
// - Answer permission requests with a configurable grant.
// - Keep scheduled notifications and device tokens so tests can inspect them.

use crate::modules::notifications::core::ports::NotificationRepository;
use crate::shared::application::errors::RepositoryError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub data: serde_json::Value,
}

pub struct InMemoryNotificationScheduler {
    permission_granted: bool,
    scheduled: RwLock<HashMap<String, ScheduledNotification>>,
    device_tokens: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl Default for InMemoryNotificationScheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InMemoryNotificationScheduler {
    pub fn new(permission_granted: bool) -> Self {
        Self {
            permission_granted,
            scheduled: RwLock::new(HashMap::new()),
            device_tokens: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn scheduled(&self, id: &str) -> Option<ScheduledNotification> {
        self.scheduled.read().await.get(id).cloned()
    }

    pub async fn scheduled_count(&self) -> usize {
        self.scheduled.read().await.len()
    }

    pub async fn device_token(&self, user_id: &str) -> Option<String> {
        self.device_tokens.read().await.get(user_id).cloned()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Notification service offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl NotificationRepository for InMemoryNotificationScheduler {
    async fn request_permissions(&self) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.permission_granted)
    }

    async fn register_device_token(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.device_tokens
            .write()
            .await
            .insert(user_id.to_string(), token.to_string());
        Ok(())
    }

    async fn schedule_local_notification(
        &self,
        title: &str,
        body: &str,
        date: DateTime<Utc>,
        data: Option<serde_json::Value>,
    ) -> Result<String, RepositoryError> {
        self.ensure_online()?;
        let id = Uuid::now_v7().to_string();
        self.scheduled.write().await.insert(
            id.clone(),
            ScheduledNotification {
                id: id.clone(),
                title: title.to_string(),
                body: body.to_string(),
                date,
                data: data.unwrap_or_else(|| serde_json::json!({})),
            },
        );
        Ok(id)
    }

    async fn cancel_notification(&self, notification_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.scheduled.write().await.remove(notification_id);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_notification_scheduler_tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_schedule_and_cancel_a_notification() {
        let scheduler = InMemoryNotificationScheduler::default();
        let at = Utc::now() + Duration::hours(1);
        let id = scheduler
            .schedule_local_notification("Standup", "Starts at 09:00", at, None)
            .await
            .expect("schedule failed");

        let scheduled = scheduler.scheduled(&id).await.expect("not scheduled");
        assert_eq!(scheduled.date, at);
        assert_eq!(scheduled.data, serde_json::json!({}));

        scheduler.cancel_notification(&id).await.unwrap();
        assert_eq!(scheduler.scheduled_count().await, 0);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn it_should_answer_permission_requests_as_configured(#[case] granted: bool) {
        let scheduler = InMemoryNotificationScheduler::new(granted);
        assert_eq!(scheduler.request_permissions().await.unwrap(), granted);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_notification_service_is_offline() {
        let mut scheduler = InMemoryNotificationScheduler::default();
        scheduler.toggle_offline();
        let result = scheduler.register_device_token("u1", "token").await;
        assert_eq!(
            result,
            Err(RepositoryError::Backend("Notification service offline".into()))
        );
    }
}
