// Reads one event for its creator or one of its participants.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::access::{ensure_visible, event_not_found};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct GetEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> GetEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self, event_id: &str) -> Result<Event, ApplicationError> {
        let current_user = require_current_user(&*self.users).await?;
        let event = self
            .events
            .get_event_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;
        ensure_visible(&event, &current_user.id)?;
        Ok(event)
    }
}
