use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::use_cases::get_events_by_date_range::inbound::graphql::GqlEvent;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state.get_event.handle(&id).await.map_err(gql_error)?;
        Ok(event.into())
    }
}
