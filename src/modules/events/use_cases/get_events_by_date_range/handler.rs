// Lists the signed-in user's events starting inside an inclusive date range.
//
// Responsibilities
// - Ask the store for the participant's events in the range.
// - Re-apply the start date predicate, the participant scope and the ordering, so results hold
//   whichever store answers.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::current_user::require_current_user;
use crate::modules::events::core::date_range::{DateRange, select_starting_within};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::shared::application::errors::ApplicationError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct GetEventsByDateRangeHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    events: Arc<TEvents>,
    users: Arc<TUsers>,
}

impl<TEvents, TUsers> GetEventsByDateRangeHandler<TEvents, TUsers>
where
    TEvents: EventRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, users: Arc<TUsers>) -> Self {
        Self { events, users }
    }

    pub async fn handle(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, ApplicationError> {
        let range = DateRange::new(start, end)?;
        let current_user = require_current_user(&*self.users).await?;
        let fetched = self
            .events
            .get_events_by_date_range(range.start, range.end, Some(&current_user.id))
            .await?;
        let scoped: Vec<Event> = fetched
            .into_iter()
            .filter(|e| e.participants.iter().any(|p| *p == current_user.id))
            .collect();
        let events = select_starting_within(scoped, &range);
        tracing::debug!(user_id = %current_user.id, count = events.len(), "events listed by date range");
        Ok(events)
    }
}
