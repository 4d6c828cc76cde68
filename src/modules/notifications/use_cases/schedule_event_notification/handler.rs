use crate::modules::events::core::access::event_not_found;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::notifications::core::ports::NotificationRepository;
use crate::modules::notifications::use_cases::schedule_event_notification::command::ScheduleEventNotification;
use crate::modules::notifications::use_cases::schedule_event_notification::decide::decide_schedule;
use crate::shared::application::errors::ApplicationError;
use chrono::Utc;
use std::sync::Arc;

pub struct ScheduleEventNotificationHandler<TNotifications, TEvents>
where
    TNotifications: NotificationRepository + 'static,
    TEvents: EventRepository + 'static,
{
    notifications: Arc<TNotifications>,
    events: Arc<TEvents>,
}

impl<TNotifications, TEvents> ScheduleEventNotificationHandler<TNotifications, TEvents>
where
    TNotifications: NotificationRepository + 'static,
    TEvents: EventRepository + 'static,
{
    pub fn new(notifications: Arc<TNotifications>, events: Arc<TEvents>) -> Self {
        Self {
            notifications,
            events,
        }
    }

    /// Returns the identifier the notification service assigned to the reminder.
    pub async fn handle(
        &self,
        command: ScheduleEventNotification,
    ) -> Result<String, ApplicationError> {
        let event = self
            .events
            .get_event_by_id(&command.event_id)
            .await?
            .ok_or_else(|| event_not_found(&command.event_id))?;
        let plan = decide_schedule(&event, command.minutes_before, Utc::now())?;

        if !self.notifications.request_permissions().await? {
            tracing::debug!(event_id = %event.id, "notification permission denied");
            return Err(ApplicationError::Authorization(
                "notification permission denied".into(),
            ));
        }

        let notification_id = self
            .notifications
            .schedule_local_notification(&plan.title, &plan.body, plan.notify_at, Some(plan.data))
            .await?;
        tracing::info!(event_id = %event.id, %notification_id, notify_at = %plan.notify_at, "reminder scheduled");
        Ok(notification_id)
    }
}
