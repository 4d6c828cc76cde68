// Opens a live feed of the signed-in user's events.
//
// The caller owns the returned subscription and must detach it to stop delivery.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::subscriptions::Subscription;
use std::sync::Arc;

pub struct WatchEventsHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> WatchEventsHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self) -> Result<Subscription<Vec<Event>>, ApplicationError> {
        let current_user = require_current_user(&*self.users).await?;
        let subscription = self.events.subscribe_to_events(&current_user.id).await?;
        tracing::debug!(user_id = %current_user.id, "event feed opened");
        Ok(subscription)
    }
}
