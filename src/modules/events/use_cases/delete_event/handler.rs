// Permanently removes an event. There is no soft delete.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::access::{ensure_owner, event_not_found};
use crate::modules::events::core::ports::EventRepository;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> DeleteEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self, event_id: &str) -> Result<(), ApplicationError> {
        let current_user = require_current_user(&*self.users).await?;
        let existing = self
            .events
            .get_event_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;
        ensure_owner(&existing, &current_user.id, "delete")?;
        self.events.delete_event(event_id).await?;
        tracing::info!(event_id, "event deleted");
        Ok(())
    }
}
