use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterDeviceBody {
    pub token: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterDeviceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    match state.register_device_token.handle(&body.token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
