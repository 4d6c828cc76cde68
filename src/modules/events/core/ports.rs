// Ports define what the events use cases need from the document store, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait in the adapters layer.
// - The store assigns ids and timestamps and is the only arbiter of concurrent writes (last
//   write wins).

use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::shared::application::errors::RepositoryError;
use crate::shared::infrastructure::subscriptions::Subscription;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get_event_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError>;

    /// Events listing `user_id` as participant, ordered by start date.
    async fn get_events_by_user_id(&self, user_id: &str) -> Result<Vec<Event>, RepositoryError>;

    /// Events starting inside `[start, end]`, restricted to `user_id` when given.
    async fn get_events_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        user_id: Option<&str>,
    ) -> Result<Vec<Event>, RepositoryError>;

    async fn create_event(&self, event: NewEvent) -> Result<Event, RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when no event has this id.
    async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event, RepositoryError>;

    async fn delete_event(&self, id: &str) -> Result<(), RepositoryError>;

    /// Delivers the participant's full event list now and after every change.
    async fn subscribe_to_events(
        &self,
        user_id: &str,
    ) -> Result<Subscription<Vec<Event>>, RepositoryError>;
}
