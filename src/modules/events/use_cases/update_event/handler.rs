use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::access::event_not_found;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::modules::events::use_cases::update_event::decide::{decide_update, validate_update};
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct UpdateEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> UpdateEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        validate_update(&command.patch)?;
        let current_user = require_current_user(&*self.users).await?;
        let existing = self
            .events
            .get_event_by_id(&command.event_id)
            .await?
            .ok_or_else(|| event_not_found(&command.event_id))?;
        let patch = decide_update(&existing, &current_user.id, command.patch)?;
        let updated = self.events.update_event(&command.event_id, patch).await?;
        tracing::info!(event_id = %updated.id, "event updated");
        Ok(updated)
    }
}
