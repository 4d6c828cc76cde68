use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::notifications::use_cases::schedule_event_notification::command::ScheduleEventNotification;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ScheduleEventNotificationMutation;

#[Object]
impl ScheduleEventNotificationMutation {
    async fn schedule_event_notification(
        &self,
        context: &Context<'_>,
        event_id: ID,
        minutes_before: Option<u32>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = ScheduleEventNotification::new(event_id.0)
            .minutes_before(minutes_before.unwrap_or(state.notify_minutes_before));
        let notification_id = state
            .schedule_event_notification
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(ID(notification_id))
    }
}
