use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decide::{decide_create, validate_create};
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct CreateEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> CreateEventHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        validate_create(&command)?;
        let current_user = require_current_user(&*self.users).await?;
        let event = self
            .events
            .create_event(decide_create(command, &current_user.id))
            .await?;
        tracing::info!(event_id = %event.id, created_by = %event.created_by, "event created");
        Ok(event)
    }
}
