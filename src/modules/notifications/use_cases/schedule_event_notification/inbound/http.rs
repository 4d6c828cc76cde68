use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::notifications::use_cases::schedule_event_notification::command::ScheduleEventNotification;
use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReminderBody {
    pub minutes_before: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReminderResponse {
    pub notification_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ScheduleReminderBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(JsonRejection::MissingJsonContentType(_)) => Json(ScheduleReminderBody::default()),
        Err(rejection) => return rejected(rejection),
    };

    let command = ScheduleEventNotification::new(event_id)
        .minutes_before(body.minutes_before.unwrap_or(state.notify_minutes_before));

    match state.schedule_event_notification.handle(command).await {
        Ok(notification_id) => (
            StatusCode::CREATED,
            Json(ScheduleReminderResponse { notification_id }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
