// Associates a push token with the signed in user. A failing notification
// service is logged and does not fail the caller.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::notifications::core::ports::NotificationRepository;
use crate::shared::application::errors::{ApplicationError, ValidationError};
use crate::shared::core::validation::is_blank;
use std::sync::Arc;

pub struct RegisterDeviceTokenHandler<TNotifications, TUsers>
where
    TNotifications: NotificationRepository + 'static,
    TUsers: UserRepository + 'static,
{
    notifications: Arc<TNotifications>,
    users: Arc<TUsers>,
}

impl<TNotifications, TUsers> RegisterDeviceTokenHandler<TNotifications, TUsers>
where
    TNotifications: NotificationRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(notifications: Arc<TNotifications>, users: Arc<TUsers>) -> Self {
        Self {
            notifications,
            users,
        }
    }

    pub async fn handle(&self, token: &str) -> Result<(), ApplicationError> {
        if is_blank(token) {
            return Err(ValidationError::MissingDeviceToken.into());
        }
        let current_user = require_current_user(&*self.users).await?;
        match self
            .notifications
            .register_device_token(&current_user.id, token.trim())
            .await
        {
            Ok(()) => tracing::info!(user_id = %current_user.id, "device token registered"),
            Err(error) => {
                tracing::warn!(user_id = %current_user.id, %error, "device token registration failed")
            }
        }
        Ok(())
    }
}
