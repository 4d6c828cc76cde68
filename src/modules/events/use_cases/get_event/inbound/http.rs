use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.get_event.handle(&event_id).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => error.into_response(),
    }
}
