use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.delete_event.handle(&id).await.map_err(gql_error)?;
        Ok(true)
    }
}
