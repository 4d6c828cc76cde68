use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::events::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::events::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
use crate::modules::events::use_cases::get_event::inbound::graphql::EventQuery;
use crate::modules::events::use_cases::get_events_by_date_range::inbound::graphql::EventsByDateRangeQuery;
use crate::modules::events::use_cases::update_event::inbound::graphql::UpdateEventMutation;
use crate::modules::notifications::use_cases::schedule_event_notification::inbound::graphql::ScheduleEventNotificationMutation;
use crate::shared::application::errors::ApplicationError;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventsByDateRangeQuery, EventQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateEventMutation,
    UpdateEventMutation,
    DeleteEventMutation,
    ScheduleEventNotificationMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Carries the HTTP status of the failure in the `status` extension.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let status = error.status_code().as_u16();
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("status", status))
}
