use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl From<CreateEventBody> for CreateEvent {
    fn from(body: CreateEventBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            start_date: body.start_date,
            end_date: body.end_date,
            location: body.location,
            color: body.color,
            is_all_day: body.is_all_day,
            participants: body.participants,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    match state.create_event.handle(body.into()).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(error) => error.into_response(),
    }
}
