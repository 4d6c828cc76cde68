use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::accounts::use_cases::sign_up::command::SignUp;
use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignUpBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    let command = SignUp {
        email: body.email,
        password: body.password,
        display_name: body.display_name,
    };

    match state.sign_up.handle(command).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(error) => error.into_response(),
    }
}
