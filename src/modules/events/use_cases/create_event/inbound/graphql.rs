use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::get_events_by_date_range::inbound::graphql::GqlEvent;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateEventInput {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    #[graphql(default)]
    pub is_all_day: bool,
    #[graphql(default)]
    pub participants: Vec<String>,
}

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        input: CreateEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateEvent {
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            color: input.color,
            is_all_day: input.is_all_day,
            participants: input.participants,
        };
        let event = state
            .create_event
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }
}
