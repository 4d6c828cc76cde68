use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::events::core::event::Event;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_all_day: bool,
    pub participants: Vec<String>,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            start_date: e.start_date,
            end_date: e.end_date,
            location: e.location,
            color: e.color,
            created_by: e.created_by,
            created_at: e.created_at,
            updated_at: e.updated_at,
            is_all_day: e.is_all_day,
            participants: e.participants,
        }
    }
}

#[derive(Default)]
pub struct EventsByDateRangeQuery;

#[Object]
impl EventsByDateRangeQuery {
    async fn events_by_date_range(
        &self,
        context: &Context<'_>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .get_events_by_date_range
            .handle(start, end)
            .await
            .map_err(gql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
