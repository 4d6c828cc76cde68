use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PasswordResetBody {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PasswordResetBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    match state.request_password_reset.handle(&body.email).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(error) => error.into_response(),
    }
}
