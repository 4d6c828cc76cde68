use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::events::core::event::EventPatch;
use crate::modules::events::use_cases::get_events_by_date_range::inbound::graphql::GqlEvent;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct EventPatchInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub is_all_day: Option<bool>,
    pub participants: Option<Vec<String>>,
}

impl From<EventPatchInput> for EventPatch {
    fn from(input: EventPatchInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            color: input.color,
            is_all_day: input.is_all_day,
            participants: input.participants,
        }
    }
}

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        input: EventPatchInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateEvent {
            event_id: id.0,
            patch: input.into(),
        };
        let event = state
            .update_event
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }
}
