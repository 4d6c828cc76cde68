// In memory implementation of the EventRepository port.
//
// Purpose
// - Support use case tests and local development without a document store.
//
// Responsibilities
// - Keep events in insertion order, which is the retrieval order callers observe.
// - Assign ids and timestamps the way the document store does.
// - Push a fresh snapshot to every live subscription after each write.

use crate::modules::events::core::date_range::{DateRange, select_starting_within, sort_by_start};
use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::modules::events::core::ports::EventRepository;
use crate::shared::application::errors::RepositoryError;
use crate::shared::infrastructure::subscriptions::{SubscriberRegistry, Subscription};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
    subscribers: Arc<SubscriberRegistry<Vec<Event>>>,
    is_offline: bool,
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            subscribers: SubscriberRegistry::new(),
            is_offline: false,
        }
    }
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Seeds a fully formed event, bypassing id and timestamp assignment.
    pub async fn insert(&self, event: Event) {
        self.events.write().await.push(event);
        self.notify_subscribers().await;
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Event store offline".into()));
        }
        Ok(())
    }

    fn participant_events(events: &[Event], user_id: &str) -> Vec<Event> {
        let mut selected: Vec<Event> = events
            .iter()
            .filter(|e| e.participants.iter().any(|p| p == user_id))
            .cloned()
            .collect();
        sort_by_start(&mut selected);
        selected
    }

    async fn notify_subscribers(&self) {
        let events = self.events.read().await;
        self.subscribers
            .publish_with(|user_id| Self::participant_events(&events, user_id))
            .await;
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get_event_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.events.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn get_events_by_user_id(&self, user_id: &str) -> Result<Vec<Event>, RepositoryError> {
        self.ensure_online()?;
        let events = self.events.read().await;
        Ok(Self::participant_events(&events, user_id))
    }

    async fn get_events_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        user_id: Option<&str>,
    ) -> Result<Vec<Event>, RepositoryError> {
        self.ensure_online()?;
        let range = DateRange::new(start, end).map_err(|e| RepositoryError::Backend(e.to_string()))?;
        let candidates: Vec<Event> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| user_id.is_none_or(|uid| e.participants.iter().any(|p| p == uid)))
            .cloned()
            .collect();
        Ok(select_starting_within(candidates, &range))
    }

    async fn create_event(&self, event: NewEvent) -> Result<Event, RepositoryError> {
        self.ensure_online()?;
        let now = Utc::now();
        let created = Event {
            id: Uuid::now_v7().to_string(),
            title: event.title,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            color: event.color,
            created_by: event.created_by,
            created_at: now,
            updated_at: now,
            is_all_day: event.is_all_day,
            participants: event.participants,
        };
        self.events.write().await.push(created.clone());
        self.notify_subscribers().await;
        Ok(created)
    }

    async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event, RepositoryError> {
        self.ensure_online()?;
        let updated = {
            let mut events = self.events.write().await;
            let event = events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| RepositoryError::NotFound {
                    entity: "event",
                    id: id.to_string(),
                })?;
            patch.apply_to(event);
            event.updated_at = Utc::now();
            event.clone()
        };
        self.notify_subscribers().await;
        Ok(updated)
    }

    async fn delete_event(&self, id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.events.write().await.retain(|e| e.id != id);
        self.notify_subscribers().await;
        Ok(())
    }

    async fn subscribe_to_events(
        &self,
        user_id: &str,
    ) -> Result<Subscription<Vec<Event>>, RepositoryError> {
        self.ensure_online()?;
        // The read guard is held across registration so no write publishes in between.
        let events = self.events.read().await;
        let initial = Self::participant_events(&events, user_id);
        Ok(self.subscribers.register(user_id, initial).await)
    }
}
