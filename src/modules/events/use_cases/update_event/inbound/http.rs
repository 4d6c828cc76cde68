use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::events::core::event::EventPatch;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::http::rejected;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    match state.update_event.handle(UpdateEvent { event_id, patch }).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => error.into_response(),
    }
}
